use std::time::Duration;

pub const DEFAULT_ZOOM: f64 = 13.;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerConfig {
    pub url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Zoom used both when the map is created and when moving to a workout
    pub zoom: f64,
    pub tiles: TileLayerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupConfig {
    pub max_width: f64,
    pub max_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub map: MapConfig,
    pub popup: PopupConfig,
    /// How long the form stays out of the layout after a submission
    pub layout_restore_delay: Duration,
    pub invalid_input_message: String,
    pub location_error_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            map: MapConfig {
                zoom: DEFAULT_ZOOM,
                tiles: TileLayerConfig {
                    url: TILE_URL.into(),
                    attribution: TILE_ATTRIBUTION.into(),
                },
            },
            popup: PopupConfig {
                max_width: 250.,
                max_height: 200.,
            },
            layout_restore_delay: Duration::from_millis(1000),
            invalid_input_message: "Inputs have to be positive numbers!".into(),
            location_error_message: "Could not get your position".into(),
        }
    }
}
