use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{form_error, form_header};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_field::FormField;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::enum_select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a005_student::aggregate::{Student, StudentForm, StudentStatus};
use contracts::shared::data_view::FormMode;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
struct StudentFormVm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    course: RwSignal<String>,
    progress: RwSignal<String>,
    status: RwSignal<StudentStatus>,
    enrolled_on: RwSignal<String>,
    error: RwSignal<Option<String>>,
}

impl StudentFormVm {
    fn new(form: StudentForm) -> Self {
        Self {
            name: RwSignal::new(form.name),
            email: RwSignal::new(form.email),
            course: RwSignal::new(form.course),
            progress: RwSignal::new(form.progress),
            status: RwSignal::new(form.status),
            enrolled_on: RwSignal::new(form.enrolled_on),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> StudentForm {
        StudentForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            course: self.course.get_untracked(),
            progress: self.progress.get_untracked(),
            status: self.status.get_untracked(),
            enrolled_on: self.enrolled_on.get_untracked(),
        }
    }
}

#[component]
pub fn StudentEditor(handle: DataViewHandle<Student>, mode: FormMode) -> impl IntoView {
    let vm = StudentFormVm::new(handle.with_untracked(|dv| dv.form_for_view()));
    let save = move || vm.error.set(handle.submit(&vm.to_form()).err());

    view! {
        <PageFrame page_id="a005_student--detail" category=PAGE_CAT_DETAIL>
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
                    <FormField label="Course" required=true>
                        <Input value=vm.course />
                    </FormField>
                    <FormField label="Progress, %" required=true>
                        <Input value=vm.progress placeholder="0-100" />
                    </FormField>
                    <FormField label="Status">
                        {enum_select(vm.status)}
                    </FormField>
                    <FormField label="Enrolled" required=true>
                        <DateInput value=vm.enrolled_on />
                    </FormField>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
