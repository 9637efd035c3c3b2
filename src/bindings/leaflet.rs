//! Leaflet Surface
//!
//! `MapSurface` backed by Leaflet and Leaflet.markercluster, both loaded
//! as globals by index.html.

use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use dashboard_core::{Bounds, DashboardError, LatLng, MapConfig, MapSurface};

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_leaflet_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type ClusterGroup;

    #[wasm_bindgen(catch, js_namespace = L, js_name = markerClusterGroup)]
    fn marker_cluster_group(options: &JsValue) -> Result<ClusterGroup, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_cluster_to(this: &ClusterGroup, map: &LeafletMap) -> ClusterGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &ClusterGroup, marker: &Marker);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &ClusterGroup, marker: &Marker);

    #[wasm_bindgen(method, js_name = zoomToShowLayer)]
    fn zoom_to_show_layer(this: &ClusterGroup, marker: &Marker, callback: &js_sys::Function);

    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn create_marker(position: &JsValue, options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;

    pub type DivIcon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> Result<DivIcon, JsValue>;
}

// ========================
// Option Structs
// ========================

#[derive(Serialize)]
struct MapOptions {
    center: [f64; 2],
    zoom: u8,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    #[serde(rename = "maxZoom")]
    max_zoom: u8,
    attribution: &'a str,
}

#[derive(Serialize)]
struct FitOptions {
    padding: [u32; 2],
    #[serde(rename = "maxZoom")]
    max_zoom: u8,
}

#[derive(Serialize)]
struct IconOptions<'a> {
    #[serde(rename = "className")]
    class_name: &'a str,
    html: &'a str,
    #[serde(rename = "iconSize")]
    icon_size: [u32; 2],
    #[serde(rename = "iconAnchor")]
    icon_anchor: [u32; 2],
}

const MARKER_ICON_HTML: &str = r#"<div class="marker-content"><i class="material-icons">location_on</i></div>"#;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(value).map_err(|e| e.to_string())
}

/// Every failure while building a marker, serialization included
fn marker_failure(position: LatLng, reason: String) -> DashboardError {
    DashboardError::MarkerCreation {
        id: format!("{:.5},{:.5}", position.lat, position.lng),
        reason,
    }
}

fn point(p: LatLng) -> [f64; 2] {
    [p.lat, p.lng]
}

// ========================
// Surface
// ========================

/// Live Leaflet map plus its clustering layer
#[derive(Default)]
pub struct LeafletSurface {
    map: Option<LeafletMap>,
    cluster: Option<ClusterGroup>,
}

impl LeafletSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for LeafletSurface {
    type Marker = Marker;

    fn container_height(&self, container_id: &str) -> Option<f64> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(container_id)?;
        Some(element.get_bounding_client_rect().height())
    }

    fn set_container_min_height(&mut self, container_id: &str, px: u32) {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(element) = element {
            if let Err(e) = element.style().set_property("min-height", &format!("{}px", px)) {
                warn!("Could not set min-height on #{}: {:?}", container_id, e);
            }
        }
    }

    fn create_map(&mut self, config: &MapConfig) -> dashboard_core::Result<()> {
        let options = to_js(&MapOptions {
            center: point(config.center),
            zoom: config.zoom,
        })
        .map_err(DashboardError::MapUnavailable)?;
        let map = create_leaflet_map(&config.container_id, &options)
            .map_err(|e| DashboardError::MapUnavailable(format!("{:?}", e)))?;

        let tile_options = to_js(&TileOptions {
            max_zoom: config.tile_max_zoom,
            attribution: &config.attribution,
        })
        .map_err(DashboardError::MapUnavailable)?;
        tile_layer(&config.tile_url, &tile_options).add_tiles_to(&map);

        let cluster = match marker_cluster_group(&JsValue::UNDEFINED) {
            Ok(cluster) => cluster,
            Err(e) => {
                map.remove();
                return Err(DashboardError::MapUnavailable(format!("clustering unavailable: {:?}", e)));
            }
        };
        cluster.add_cluster_to(&map);
        map.invalidate_size();

        self.map = Some(map);
        self.cluster = Some(cluster);
        Ok(())
    }

    fn create_marker(&mut self, position: LatLng, icon_class: &str, popup_html: &str) -> dashboard_core::Result<Marker> {
        let failed = |reason: String| marker_failure(position, reason);
        let js_failed = |e: JsValue| failed(format!("{:?}", e));
        let icon_options = to_js(&IconOptions {
            class_name: icon_class,
            html: MARKER_ICON_HTML,
            icon_size: [40, 40],
            icon_anchor: [20, 40],
        })
        .map_err(failed)?;
        let icon = div_icon(&icon_options).map_err(js_failed)?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"icon".into(), &icon).map_err(js_failed)?;
        let position_js = to_js(&point(position)).map_err(failed)?;
        let marker = create_marker(&position_js, &options).map_err(js_failed)?;
        marker.bind_popup(popup_html);
        Ok(marker)
    }

    fn add_to_cluster(&mut self, marker: &Marker) {
        if let Some(cluster) = &self.cluster {
            cluster.add_layer(marker);
        }
    }

    fn remove_from_cluster(&mut self, marker: &Marker) {
        if let Some(cluster) = &self.cluster {
            cluster.remove_layer(marker);
        }
    }

    fn fit_bounds(&mut self, bounds: &Bounds, padding: u32, max_zoom: u8) {
        let Some(map) = &self.map else { return };
        let corners = [point(bounds.south_west), point(bounds.north_east)];
        let options = FitOptions {
            padding: [padding, padding],
            max_zoom,
        };
        if let (Ok(corners), Ok(options)) = (to_js(&corners), to_js(&options)) {
            map.fit_bounds(&corners, &options);
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        let Some(map) = &self.map else { return };
        if let Ok(center) = to_js(&point(center)) {
            map.set_view(&center, zoom);
        }
    }

    fn open_popup(&mut self, marker: &Marker) {
        match &self.cluster {
            // the marker may be folded into a cluster at the current zoom
            Some(cluster) => {
                let target = marker.clone();
                let open = Closure::once_into_js(move || {
                    target.open_popup();
                });
                cluster.zoom_to_show_layer(marker, open.unchecked_ref());
            }
            None => {
                marker.open_popup();
            }
        }
    }

    fn release(&mut self) {
        self.cluster = None;
        if let Some(map) = self.map.take() {
            map.remove();
        }
    }
}
