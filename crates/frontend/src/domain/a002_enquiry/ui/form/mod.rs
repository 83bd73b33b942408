use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{form_error, form_header};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_field::FormField;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::enum_select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_enquiry::aggregate::{Enquiry, EnquiryForm, EnquiryStatus};
use contracts::shared::data_view::FormMode;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
struct EnquiryFormVm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
    status: RwSignal<EnquiryStatus>,
    received_on: RwSignal<String>,
    error: RwSignal<Option<String>>,
}

impl EnquiryFormVm {
    fn new(form: EnquiryForm) -> Self {
        Self {
            name: RwSignal::new(form.name),
            email: RwSignal::new(form.email),
            subject: RwSignal::new(form.subject),
            message: RwSignal::new(form.message),
            status: RwSignal::new(form.status),
            received_on: RwSignal::new(form.received_on),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> EnquiryForm {
        EnquiryForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            subject: self.subject.get_untracked(),
            message: self.message.get_untracked(),
            status: self.status.get_untracked(),
            received_on: self.received_on.get_untracked(),
        }
    }
}

#[component]
pub fn EnquiryEditor(handle: DataViewHandle<Enquiry>, mode: FormMode) -> impl IntoView {
    let vm = EnquiryFormVm::new(handle.with_untracked(|dv| dv.form_for_view()));
    let save = move || vm.error.set(handle.submit(&vm.to_form()).err());

    view! {
        <PageFrame page_id="a002_enquiry--detail" category=PAGE_CAT_DETAIL>
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
                    <FormField label="Subject" required=true>
                        <Input value=vm.subject />
                    </FormField>
                    <FormField label="Message" required=true>
                        <Textarea value=vm.message attr:rows=8 />
                    </FormField>
                    <FormField label="Status">
                        {enum_select(vm.status)}
                    </FormField>
                    <FormField label="Received" required=true>
                        <DateInput value=vm.received_on />
                    </FormField>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
