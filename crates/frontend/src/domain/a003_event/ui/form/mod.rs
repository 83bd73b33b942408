use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::data_view_parts::{form_error, form_header};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_field::FormField;
use crate::shared::data::DataViewHandle;
use crate::shared::list_utils::enum_select;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_event::aggregate::{Event, EventCategory, EventForm, EventStatus};
use contracts::shared::data_view::FormMode;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy)]
struct EventFormVm {
    title: RwSignal<String>,
    location: RwSignal<String>,
    starts_on: RwSignal<String>,
    category: RwSignal<EventCategory>,
    capacity: RwSignal<String>,
    status: RwSignal<EventStatus>,
    error: RwSignal<Option<String>>,
}

impl EventFormVm {
    fn new(form: EventForm) -> Self {
        Self {
            title: RwSignal::new(form.title),
            location: RwSignal::new(form.location),
            starts_on: RwSignal::new(form.starts_on),
            category: RwSignal::new(form.category),
            capacity: RwSignal::new(form.capacity),
            status: RwSignal::new(form.status),
            error: RwSignal::new(None),
        }
    }

    fn to_form(self) -> EventForm {
        EventForm {
            title: self.title.get_untracked(),
            location: self.location.get_untracked(),
            starts_on: self.starts_on.get_untracked(),
            category: self.category.get_untracked(),
            capacity: self.capacity.get_untracked(),
            status: self.status.get_untracked(),
        }
    }
}

#[component]
pub fn EventEditor(handle: DataViewHandle<Event>, mode: FormMode) -> impl IntoView {
    let vm = EventFormVm::new(handle.with_untracked(|dv| dv.form_for_view()));
    let save = move || vm.error.set(handle.submit(&vm.to_form()).err());

    view! {
        <PageFrame page_id="a003_event--detail" category=PAGE_CAT_DETAIL>
            {form_header(handle, matches!(mode, FormMode::Edit(_)), save)}
            <div class="page__content">
                {form_error(vm.error)}
                <CardAnimated style="max-width: 640px;">
                    <FormField label="Title" required=true>
                        <Input value=vm.title placeholder="Rust in production" />
                    </FormField>
                    <FormField label="Location" required=true>
                        <Input value=vm.location placeholder="Online" />
                    </FormField>
                    <FormField label="Date" required=true>
                        <DateInput value=vm.starts_on />
                    </FormField>
                    <FormField label="Category">
                        {enum_select(vm.category)}
                    </FormField>
                    <FormField label="Capacity" required=true>
                        <Input value=vm.capacity placeholder="40" />
                    </FormField>
                    <FormField label="Status">
                        {enum_select(vm.status)}
                    </FormField>
                </CardAnimated>
            </div>
        </PageFrame>
    }
}
