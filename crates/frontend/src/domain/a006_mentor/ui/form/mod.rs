use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{form_error, form_header};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_field::FormField;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::enum_select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a006_mentor::aggregate::{Mentor, MentorForm, MentorStatus};
use contracts::shared::data_view::FormMode;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
struct MentorFormVm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    expertise: RwSignal<String>,
    status: RwSignal<MentorStatus>,
    joined_on: RwSignal<String>,
    error: RwSignal<Option<String>>,
}

impl MentorFormVm {
    fn new(form: MentorForm) -> Self {
        Self {
            name: RwSignal::new(form.name),
            email: RwSignal::new(form.email),
            expertise: RwSignal::new(form.expertise),
            status: RwSignal::new(form.status),
            joined_on: RwSignal::new(form.joined_on),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> MentorForm {
        MentorForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            expertise: self.expertise.get_untracked(),
            status: self.status.get_untracked(),
            joined_on: self.joined_on.get_untracked(),
        }
    }
}

/// Рейтинг и число студентов в форме не редактируются
#[component]
pub fn MentorEditor(handle: DataViewHandle<Mentor>, mode: FormMode) -> impl IntoView {
    let vm = MentorFormVm::new(handle.with_untracked(|dv| dv.form_for_view()));
    let save = move || vm.error.set(handle.submit(&vm.to_form()).err());

    view! {
        <PageFrame page_id="a006_mentor--detail" category=PAGE_CAT_DETAIL>
            {form_header(handle, matches!(mode, FormMode::Edit(_)), save)}
            <div class="page__content">
                {form_error(vm.error)}
                <CardAnimated style="max-width: 640px;">
                    <FormField label="Name" required=true>
                        <Input value=vm.name />
                    </FormField>
                    <FormField label="Email" required=true>
                        <Input value=vm.email placeholder="name@example.com" />
                    </FormField>
                    <FormField label="Expertise" required=true>
                        <Input value=vm.expertise placeholder="Rust, distributed systems" />
                    </FormField>
                    <FormField label="Status">
                        {enum_select(vm.status)}
                    </FormField>
                    <FormField label="Joined" required=true>
                        <DateInput value=vm.joined_on />
                    </FormField>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
