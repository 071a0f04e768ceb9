use gloo_console::info;
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Node};
use workout_logger_lib::{config::TileLayerConfig, coordinate::Coordinate, entry::MarkerPopup, ports::MapView};
use yew::{Callback, Html};

/// Leaflet map living in its own container div, embedded into the yew tree with `Html::VRef`.
pub struct LeafletMap {
    map: Map,
    container: HtmlElement,
    on_click: Callback<Coordinate>,
}

impl LeafletMap {
    pub fn new(on_click: Callback<Coordinate>) -> Result<Self, JsValue> {
        let container: HtmlElement = document().create_element("div")?.dyn_into()?;
        container.set_id("map");
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());

        Ok(Self {
            map,
            container,
            on_click,
        })
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn register_click_handler(&self) {
        let on_click = self.on_click.clone();
        self.map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let latlng = event.lat_lng();
            on_click.emit(Coordinate::new(latlng.lat(), latlng.lng()));
        }));
    }
}

impl MapView for LeafletMap {
    fn load(&mut self, center: Coordinate, zoom: f64, tiles: &TileLayerConfig) {
        info!(format!("http://www.google.pt/maps/@{},{}", center.latitude, center.longitude));

        self.map.invalidate_size(false);
        self.map.set_view(&lat_lng(center), zoom);
        add_tile_layer(&self.map, tiles);

        self.register_click_handler();
    }

    fn add_marker(&mut self, at: Coordinate, popup: &MarkerPopup) {
        let opts = PopupOptions::default();
        opts.set_max_width(popup.max_width);
        opts.set_max_height(popup.max_height);
        opts.set_auto_close(popup.auto_close);
        opts.set_close_on_click(popup.close_on_click);
        opts.set_class_name(popup.class_name.clone());

        let leaflet_popup = Popup::new(&opts, None);
        leaflet_popup.set_content(&popup.content.as_str().into());

        let marker = Marker::new(&lat_lng(at));
        marker.add_to(&self.map);
        marker.bind_popup(&leaflet_popup);
        marker.open_popup();
    }

    fn set_view(&mut self, center: Coordinate, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }
}

fn lat_lng(coordinate: Coordinate) -> LatLng {
    LatLng::new(coordinate.latitude, coordinate.longitude)
}

fn add_tile_layer(map: &Map, tiles: &TileLayerConfig) {
    let opts = TileLayerOptions::new();
    opts.set_attribution(tiles.attribution.clone());
    opts.set_update_when_idle(true);
    TileLayer::new_options(&tiles.url, &opts).add_to(map);
}
