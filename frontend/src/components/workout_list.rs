use wasm_bindgen::JsCast;
use web_sys::Element;
use workout_logger_lib::{entry::WorkoutEntry, ports::EntryList};
use yew::prelude::*;

use super::workout_form::{FormRefs, WorkoutForm};

/// Forwards rendered entries to the root component, which owns the list.
pub struct EntryFeed {
    on_entry: Callback<WorkoutEntry>,
}

impl EntryFeed {
    pub fn new(on_entry: Callback<WorkoutEntry>) -> Self {
        Self { on_entry }
    }
}

impl EntryList for EntryFeed {
    fn insert(&mut self, entry: WorkoutEntry) {
        self.on_entry.emit(entry);
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub entries: Vec<WorkoutEntry>,
    pub form_refs: FormRefs,
    pub on_submit: Callback<()>,
    pub on_type_change: Callback<String>,
    /// Receives the `data-id` of the clicked entry, or `None` for clicks outside any entry
    pub on_entry_click: Callback<Option<String>>,
}

#[function_component]
pub fn WorkoutList(props: &Props) -> Html {
    let onclick = {
        let on_entry_click = props.on_entry_click.clone();
        Callback::from(move |e: MouseEvent| on_entry_click.emit(clicked_entry_id(&e)))
    };

    html! {
        <ul class="workouts" {onclick}>
            <WorkoutForm
                refs={props.form_refs.clone()}
                on_submit={props.on_submit.clone()}
                on_type_change={props.on_type_change.clone()}
            />
            { for props.entries.iter().map(render_entry) }
        </ul>
    }
}

fn clicked_entry_id(e: &MouseEvent) -> Option<String> {
    let target: Element = e.target()?.dyn_into().ok()?;
    let entry = target.closest(".workout").ok()??;
    entry.get_attribute("data-id")
}

fn render_entry(entry: &WorkoutEntry) -> Html {
    html! {
        <li class={entry.class_name()} key={entry.id.to_string()} data-id={entry.id.to_string()}>
            <h2 class="workout__title">{entry.title.clone()}</h2>
            { for entry.details.iter().map(|detail| html! {
                <div class="workout__details">
                    <span class="workout__icon">{detail.icon}</span>
                    <span class="workout__value">{detail.value.clone()}</span>
                    <span class="workout__unit">{detail.unit}</span>
                </div>
            }) }
        </li>
    }
}
