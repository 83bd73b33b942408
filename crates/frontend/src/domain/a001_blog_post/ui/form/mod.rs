use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{form_error, form_header};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_field::FormField;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::enum_select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_blog_post::aggregate::{
    make_excerpt, read_time_minutes, BlogCategory, BlogPost, BlogPostForm, PostStatus,
};
use contracts::shared::data_view::FormMode;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
struct BlogPostFormVm {
    title: RwSignal<String>,
    author: RwSignal<String>,
    category: RwSignal<BlogCategory>,
    content: RwSignal<String>,
    status: RwSignal<PostStatus>,
    cover_image_url: RwSignal<String>,
    published_on: RwSignal<String>,
    error: RwSignal<Option<String>>,
}

impl BlogPostFormVm {
    fn new(form: BlogPostForm) -> Self {
        Self {
            title: RwSignal::new(form.title),
            author: RwSignal::new(form.author),
            category: RwSignal::new(form.category),
            content: RwSignal::new(form.content),
            status: RwSignal::new(form.status),
            cover_image_url: RwSignal::new(form.cover_image_url),
            published_on: RwSignal::new(form.published_on),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> BlogPostForm {
        BlogPostForm {
            title: self.title.get_untracked(),
            author: self.author.get_untracked(),
            category: self.category.get_untracked(),
            content: self.content.get_untracked(),
            status: self.status.get_untracked(),
            cover_image_url: self.cover_image_url.get_untracked(),
            published_on: self.published_on.get_untracked(),
        }
    }
}

#[component]
pub fn BlogPostEditor(handle: DataViewHandle<BlogPost>, mode: FormMode) -> impl IntoView {
    let vm = BlogPostFormVm::new(handle.with_untracked(|dv| dv.form_for_view()));
    let save = move || vm.error.set(handle.submit(&vm.to_form()).err());

    // превью производных полей, пересчитываются при сохранении
    let preview = move || {
        vm.content.with(|content| {
            format!(
                "{} min read · {}",
                read_time_minutes(content),
                make_excerpt(content)
            )
        })
    };

    view! {
        <PageFrame page_id="a001_blog_post--detail" category=PAGE_CAT_DETAIL>
            {form_header(handle, matches!(mode, FormMode::Edit(_)), save)}
            <div class="page__content">
                {form_error(vm.error)}
                <CardAnimated style="max-width: 820px;">
                    <FormField label="Title" required=true>
                        <Input value=vm.title />
                    </FormField>
                    <FormField label="Author" required=true>
                        <Input value=vm.author />
                    </FormField>
                    <FormField label="Category">
                        {enum_select(vm.category)}
                    </FormField>
                    <FormField label="Status">
                        {enum_select(vm.status)}
                    </FormField>
                    <FormField label="Publish date" required=true>
                        <DateInput value=vm.published_on />
                    </FormField>
                    <FormField label="Cover image URL">
                        <Input value=vm.cover_image_url placeholder="https://picsum.photos/seed/blog/640/360" />
                    </FormField>
                    <FormField label="Content" required=true>
                        <Textarea value=vm.content attr:rows=12 />
                    </FormField>
                    <div class="form__hint">{preview}</div>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
