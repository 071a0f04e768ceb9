use chrono::Local;
use components::{
    map_component::LeafletMap,
    workout_form::{FormHandle, FormRefs},
    workout_list::{EntryFeed, WorkoutList},
};
use gloo_console::{error, info};
use notifier::BrowserNotifier;
use workout_logger_lib::{
    app::{SubmitError, WorkoutLog},
    config::AppConfig,
    coordinate::Coordinate,
    entry::WorkoutEntry,
    ports::Ports,
};
use yew::prelude::*;

mod components;
mod geolocation;
mod notifier;

type Log = WorkoutLog<LeafletMap, FormHandle, EntryFeed, BrowserNotifier>;

enum MainMsg {
    LocationFound(Coordinate),
    LocationFailed,
    MapClicked(Coordinate),
    TypeChanged(String),
    Submit,
    EntryClicked(Option<String>),
    EntryRendered(WorkoutEntry),
}

struct Model {
    log: Log,
    form_refs: FormRefs,
    entries: Vec<WorkoutEntry>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();

        let form_refs = FormRefs::default();
        let map = LeafletMap::new(link.callback(MainMsg::MapClicked)).expect("failed to create the map container");

        let ports = Ports {
            map,
            form: FormHandle::new(form_refs.clone()),
            list: EntryFeed::new(link.callback(MainMsg::EntryRendered)),
            notifier: BrowserNotifier,
        };

        geolocation::request_position(
            link.callback(MainMsg::LocationFound),
            link.callback(|()| MainMsg::LocationFailed),
        );

        Self {
            log: WorkoutLog::new(ports, AppConfig::default()),
            form_refs,
            entries: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::LocationFound(position) => {
                self.log.location_found(position);
            }
            MainMsg::LocationFailed => {
                error!("Could not get the current position");
                self.log.location_failed();
            }
            MainMsg::MapClicked(at) => {
                self.log.map_clicked(at);
            }
            MainMsg::TypeChanged(value) => {
                self.log.type_changed(&value);
            }
            MainMsg::Submit => {
                let input = self.log.ports().form.read();
                match self.log.submit(&input, Local::now()) {
                    Ok(id) => info!(format!("Logged workout {id}, {} in total", self.log.workouts().len())),
                    Err(SubmitError::Invalid(err)) => info!(format!("Rejected workout: {err}")),
                    Err(err) => error!(format!("{err}")),
                }
            }
            MainMsg::EntryClicked(data_id) => {
                self.log.move_to(data_id.as_deref());
            }
            MainMsg::EntryRendered(entry) => {
                self.entries.push(entry);
                return true;
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <div class="sidebar">
                    <WorkoutList
                        entries={self.entries.clone()}
                        form_refs={self.form_refs.clone()}
                        on_submit={link.callback(|()| MainMsg::Submit)}
                        on_type_change={link.callback(MainMsg::TypeChanged)}
                        on_entry_click={link.callback(MainMsg::EntryClicked)}
                    />
                </div>
                { self.log.ports().map.render() }
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
