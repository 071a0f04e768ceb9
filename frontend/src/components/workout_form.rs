use std::time::Duration;

use gloo_console::error;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement};
use workout_logger_lib::{form::FormInput, ports::FormView, workout::WorkoutType};
use yew::prelude::*;

const HIDDEN: &str = "hidden";
const ROW_HIDDEN: &str = "form__row--hidden";

/// Node refs to the form and its inputs. The form is never re-rendered by
/// yew after mount, so its classes and values are handled imperatively.
#[derive(Clone, Default, PartialEq)]
pub struct FormRefs {
    pub form: NodeRef,
    pub workout_type: NodeRef,
    pub distance: NodeRef,
    pub duration: NodeRef,
    pub cadence: NodeRef,
    pub elevation: NodeRef,
}

pub struct FormHandle {
    refs: FormRefs,
    layout_restore: Option<Timeout>,
}

impl FormHandle {
    pub fn new(refs: FormRefs) -> Self {
        Self {
            refs,
            layout_restore: None,
        }
    }

    pub fn read(&self) -> FormInput {
        FormInput {
            workout_type: self.refs.workout_type.cast::<HtmlSelectElement>().map(|s| s.value()).unwrap_or_default(),
            distance: input_value(&self.refs.distance),
            duration: input_value(&self.refs.duration),
            cadence: input_value(&self.refs.cadence),
            elevation: input_value(&self.refs.elevation),
        }
    }

    fn form(&self) -> Option<HtmlElement> {
        self.refs.form.cast::<HtmlElement>()
    }
}

impl FormView for FormHandle {
    fn reveal(&mut self) {
        let Some(form) = self.form() else {
            error!("Workout form is not mounted");
            return;
        };

        log_failure("show form", form.class_list().remove_1(HIDDEN));
        if let Some(distance) = self.refs.distance.cast::<HtmlInputElement>() {
            log_failure("focus distance", distance.focus());
        }
    }

    fn hide_and_reset(&mut self, layout_delay: Duration) {
        for input in [&self.refs.distance, &self.refs.duration, &self.refs.cadence, &self.refs.elevation] {
            if let Some(input) = input.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }

        let Some(form) = self.form() else {
            return;
        };

        log_failure("hide form", form.style().set_property("display", "none"));
        log_failure("hide form", form.class_list().add_1(HIDDEN));

        let restore = form.clone();
        self.layout_restore = Some(Timeout::new(timeout_millis(layout_delay), move || {
            log_failure("restore form layout", restore.style().set_property("display", "grid"));
        }));
    }

    fn show_metric_row(&mut self, workout_type: WorkoutType) {
        toggle_row(&self.refs.cadence, workout_type != WorkoutType::Running);
        toggle_row(&self.refs.elevation, workout_type != WorkoutType::Cycling);
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|input| input.value()).unwrap_or_default()
}

fn toggle_row(input: &NodeRef, hidden: bool) {
    let row = input
        .cast::<Element>()
        .and_then(|input| input.closest(".form__row").ok().flatten());

    if let Some(row) = row {
        log_failure("toggle metric row", row.class_list().toggle_with_force(ROW_HIDDEN, hidden));
    }
}

fn log_failure<T>(action: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        error!(format!("Failed to {action}"), err);
    }
}

/// Delays beyond what a browser timer can hold are clamped.
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub refs: FormRefs,
    pub on_submit: Callback<()>,
    pub on_type_change: Callback<String>,
}

#[function_component]
pub fn WorkoutForm(props: &Props) -> Html {
    let refs = &props.refs;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange = {
        let on_type_change = props.on_type_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_type_change.emit(select.value());
        })
    };

    html! {
        <form class="form hidden" ref={refs.form.clone()} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" ref={refs.workout_type.clone()} {onchange}>
                    <option value="running">{"Running"}</option>
                    <option value="cycling">{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input class="form__input form__input--distance" placeholder="km" ref={refs.distance.clone()} />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input class="form__input form__input--duration" placeholder="min" ref={refs.duration.clone()} />
            </div>
            <div class="form__row">
                <label class="form__label">{"Cadence"}</label>
                <input class="form__input form__input--cadence" placeholder="step/min" ref={refs.cadence.clone()} />
            </div>
            <div class="form__row form__row--hidden">
                <label class="form__label">{"Elev Gain"}</label>
                <input class="form__input form__input--elevation" placeholder="meters" ref={refs.elevation.clone()} />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
