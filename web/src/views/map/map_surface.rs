use crate::{server::get_map_settings, views::map::click_event::ClickPayload};
use leptos::{
    logging::{error, log},
    prelude::*,
};
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::Coordinate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 35.6895,
    longitude: 139.6917,
};
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Leaflet map that reports every resolvable click through
/// `on_location_select(latitude, longitude)` and keeps a single marker on the
/// last selected point.
#[component]
pub fn MapSurface<F>(on_location_select: F) -> impl IntoView
where
    F: Fn(f64, f64) + 'static + Copy + Send + Sync,
{
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);
    let marker = RwSignal::new(None::<Coordinate>);

    let settings = Resource::new(
        || (),
        |_| async move { get_map_settings().await.unwrap_or_default() },
    );

    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };

        let cb: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |event: JsValue| {
            match ClickPayload::from_js(&event).coordinate() {
                Some(coordinate) => {
                    log!(
                        "Coordinates extracted: {}, {}",
                        coordinate.latitude,
                        coordinate.longitude
                    );
                    on_location_select(coordinate.latitude, coordinate.longitude);
                    marker.set(Some(coordinate));
                }
                None => {
                    error!("Could not extract coordinates from click event: {:?}", event);
                }
            }
        }));

        // Leaflet's Evented exposes addEventListener as an alias of `on`.
        let raw_map: &EventTarget = map_instance.unchecked_ref();
        if let Err(err) =
            raw_map.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        {
            error!("Failed to attach map click listener: {:?}", err);
        }

        cb.forget();
    });

    view! {
        <MapContainer
            style="height: 100%; width: 100%"
            center=Position::new(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude)
            zoom=DEFAULT_ZOOM
            set_view=true
            map=map.write_only()
        >
            <Transition fallback=|| ()>
                {move || {
                    settings.get().map(|settings| {
                        view! {
                            <TileLayer
                                url=settings.tile_url
                                attribution=settings.attribution
                            />
                        }
                    })
                }}
            </Transition>
            {move || {
                marker.get().map(|coordinate| {
                    view! {
                        <Marker
                            position=Position::new(coordinate.latitude, coordinate.longitude)
                            draggable=false
                        />
                    }
                })
            }}
        </MapContainer>
    }
}
