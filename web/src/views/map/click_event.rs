use shared_types::Coordinate;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

/// Anything that hands out a latitude/longitude pair.
pub trait LatLngAccessor {
    fn lat(&self) -> Option<f64>;
    fn lng(&self) -> Option<f64>;
}

/// A JS lat/lng object. Each value may be a plain number (Leaflet's `LatLng`)
/// or a zero-argument method returning one (`latLng.lat()`).
pub struct JsLatLng(JsValue);

impl LatLngAccessor for JsLatLng {
    fn lat(&self) -> Option<f64> {
        accessor_value(&self.0, "lat")
    }

    fn lng(&self) -> Option<f64> {
        accessor_value(&self.0, "lng")
    }
}

/// The click event shapes the map surface understands.
pub enum ClickPayload {
    /// `event.detail.latLng` carrying plain numeric `lat`/`lng` fields.
    Detail { lat: Option<f64>, lng: Option<f64> },
    /// `event.latlng` (or `event.latLng`), read as fields or method calls.
    Accessor(Box<dyn LatLngAccessor>),
    Unrecognized,
}

impl ClickPayload {
    pub fn from_js(event: &JsValue) -> Self {
        if let Some(pair) = object_property(event, "detail")
            .and_then(|detail| object_property(&detail, "latLng"))
        {
            return ClickPayload::Detail {
                lat: number_property(&pair, "lat"),
                lng: number_property(&pair, "lng"),
            };
        }

        match object_property(event, "latlng").or_else(|| object_property(event, "latLng")) {
            Some(accessor) => ClickPayload::Accessor(Box::new(JsLatLng(accessor))),
            None => ClickPayload::Unrecognized,
        }
    }

    /// Both values must be defined, finite numbers; otherwise the click carries
    /// no usable coordinate.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let (lat, lng) = match self {
            ClickPayload::Detail { lat, lng } => ((*lat)?, (*lng)?),
            ClickPayload::Accessor(accessor) => (accessor.lat()?, accessor.lng()?),
            ClickPayload::Unrecognized => return None,
        };

        (lat.is_finite() && lng.is_finite()).then(|| Coordinate::new(lat, lng))
    }
}

fn object_property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| value.is_object())
}

fn number_property(target: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
}

fn accessor_value(target: &JsValue, key: &str) -> Option<f64> {
    let value = Reflect::get(target, &JsValue::from_str(key)).ok()?;
    if value.is_function() {
        value.unchecked_ref::<Function>().call0(target).ok()?.as_f64()
    } else {
        value.as_f64()
    }
}
