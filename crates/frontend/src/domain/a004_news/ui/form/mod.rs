use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{form_error, form_header};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_field::FormField;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::enum_select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_news::aggregate::{NewsCategory, NewsForm, NewsItem, NewsStatus};
use contracts::shared::data_view::FormMode;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
struct NewsFormVm {
    headline: RwSignal<String>,
    summary: RwSignal<String>,
    body: RwSignal<String>,
    category: RwSignal<NewsCategory>,
    status: RwSignal<NewsStatus>,
    published_on: RwSignal<String>,
    error: RwSignal<Option<String>>,
}

impl NewsFormVm {
    fn new(form: NewsForm) -> Self {
        Self {
            headline: RwSignal::new(form.headline),
            summary: RwSignal::new(form.summary),
            body: RwSignal::new(form.body),
            category: RwSignal::new(form.category),
            status: RwSignal::new(form.status),
            published_on: RwSignal::new(form.published_on),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> NewsForm {
        NewsForm {
            headline: self.headline.get_untracked(),
            summary: self.summary.get_untracked(),
            body: self.body.get_untracked(),
            category: self.category.get_untracked(),
            status: self.status.get_untracked(),
            published_on: self.published_on.get_untracked(),
        }
    }
}

#[component]
pub fn NewsEditor(handle: DataViewHandle<NewsItem>, mode: FormMode) -> impl IntoView {
    let vm = NewsFormVm::new(handle.with_untracked(|dv| dv.form_for_view()));
    let save = move || vm.error.set(handle.submit(&vm.to_form()).err());

    view! {
        <PageFrame page_id="a004_news--detail" category=PAGE_CAT_DETAIL>
            {form_header(handle, matches!(mode, FormMode::Edit(_)), save)}
            <div class="page__content">
                {form_error(vm.error)}
                <CardAnimated style="max-width: 820px;">
                    <FormField label="Headline" required=true>
                        <Input value=vm.headline />
                    </FormField>
                    <FormField label="Summary" required=true>
                        <Textarea value=vm.summary attr:rows=3 />
                    </FormField>
                    <FormField label="Body" required=true>
                        <Textarea value=vm.body attr:rows=10 />
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
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
