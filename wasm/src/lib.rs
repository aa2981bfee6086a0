//! FitTrack WASM Module
//!
//! WebAssembly bindings for the dashboard. Each chart function returns the
//! Chart.js config as a JSON string; the page hands it straight to
//! `new Chart(ctx, JSON.parse(config))`.

use fittrack_shared::charts;
use fittrack_shared::widgets::{self, Alert, Rect, WaterFillAnimation, FADE_IN_FALLBACK_MS};
use fittrack_shared::{
    validate_profile, ActivityLevel, BiologicalSex, Dashboard, FitError, MacroGrams, ProfileInput,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js_error(err: FitError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate the profile form.
///
/// Returns the alert text to show, or `None` when the form may submit.
#[wasm_bindgen]
pub fn validate_form(age: u32, weight_kg: f64, goal_weight_kg: f64, height_cm: f64) -> Option<String> {
    let profile = ProfileInput {
        age,
        weight_kg,
        goal_weight_kg,
        height_cm,
        ..ProfileInput::default()
    };
    validate_profile(&profile).err().map(|failure| failure.to_string())
}

/// Error alert for a rejected form, as JSON
#[wasm_bindgen]
pub fn form_alert(age: u32, weight_kg: f64, goal_weight_kg: f64, height_cm: f64) -> Option<String> {
    validate_form(age, weight_kg, goal_weight_kg, height_cm)
        .and_then(|message| serde_json::to_string(&Alert::error(message)).ok())
}

#[wasm_bindgen]
pub fn progress_chart(current_weight_kg: f64, goal_weight_kg: f64) -> Result<String, JsValue> {
    let chart = charts::progress_chart(current_weight_kg, goal_weight_kg).map_err(to_js_error)?;
    to_json(&chart)
}

#[wasm_bindgen]
pub fn calorie_chart(calorie_target: f64) -> Result<String, JsValue> {
    let chart = charts::calorie_chart(calorie_target).map_err(to_js_error)?;
    to_json(&chart)
}

#[wasm_bindgen]
pub fn water_chart(recommended_liters: f64) -> Result<String, JsValue> {
    let chart = charts::water_chart(recommended_liters).map_err(to_js_error)?;
    to_json(&chart)
}

#[wasm_bindgen]
pub fn bmi_chart(bmi: f64) -> Result<String, JsValue> {
    let chart = charts::bmi_chart(bmi).map_err(to_js_error)?;
    to_json(&chart)
}

#[wasm_bindgen]
pub fn macro_chart(protein_g: f64, fat_g: f64, carbs_g: f64) -> Result<String, JsValue> {
    let chart = charts::macro_chart(MacroGrams {
        protein: protein_g,
        fat: fat_g,
        carbs: carbs_g,
    })
    .map_err(to_js_error)?;
    to_json(&chart)
}

/// Frames of the water glass animation, as JSON
#[wasm_bindgen]
pub fn water_fill_frames(recommended_liters: f64) -> Result<String, JsValue> {
    let frames: Vec<_> = WaterFillAnimation::new(recommended_liters)
        .map_err(to_js_error)?
        .collect();
    to_json(&frames)
}

/// Delay after which fade-in elements are shown regardless of scroll
#[wasm_bindgen]
pub fn fade_in_fallback_ms() -> u32 {
    FADE_IN_FALLBACK_MS
}

/// Tooltip position centered above an element's bounding box, as JSON
#[wasm_bindgen]
pub fn tooltip_position(
    anchor_top: f64,
    anchor_left: f64,
    anchor_width: f64,
    anchor_height: f64,
    tip_width: f64,
    tip_height: f64,
) -> Result<String, JsValue> {
    let anchor = Rect {
        top: anchor_top,
        left: anchor_left,
        width: anchor_width,
        height: anchor_height,
    };
    to_json(&widgets::tooltip_position(anchor, tip_width, tip_height))
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    fittrack_shared::calculate_bmi(weight_kg, height_cm)
}

/// Build a profile from raw form values, rejecting unknown select options
fn profile_from_form(
    age: u32,
    weight_kg: f64,
    goal_weight_kg: f64,
    height_cm: f64,
    sex: &str,
    activity_level: &str,
) -> fittrack_shared::Result<ProfileInput> {
    Ok(ProfileInput {
        age,
        weight_kg,
        goal_weight_kg,
        height_cm,
        sex: sex.parse::<BiologicalSex>()?,
        activity_level: activity_level.parse::<ActivityLevel>()?,
    })
}

/// Build the whole dashboard, as JSON.
///
/// `seed` drives exercise selection. It arrives as a JS `BigInt`, so pass
/// e.g. `BigInt(Date.now())` for a fresh pick.
#[wasm_bindgen]
pub fn dashboard(
    age: u32,
    weight_kg: f64,
    goal_weight_kg: f64,
    height_cm: f64,
    sex: &str,
    activity_level: &str,
    seed: u64,
) -> Result<String, JsValue> {
    let profile =
        profile_from_form(age, weight_kg, goal_weight_kg, height_cm, sex, activity_level)
            .map_err(to_js_error)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let dashboard = Dashboard::build(&profile, &mut rng).map_err(to_js_error)?;
    to_json(&dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_form() {
        assert_eq!(validate_form(30, 80.0, 75.0, 180.0), None);
        assert_eq!(
            validate_form(30, 80.0, 75.0, 300.0).as_deref(),
            Some("Please enter a valid height between 100cm and 250cm.")
        );
    }

    #[test]
    fn test_form_alert() {
        let alert = form_alert(10, 80.0, 75.0, 180.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&alert).unwrap();
        assert_eq!(value["class_name"], "alert alert-error");
        assert!(form_alert(30, 80.0, 75.0, 180.0).is_none());
    }

    #[test]
    fn test_chart_json() {
        let json = progress_chart(80.0, 75.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"].as_array().unwrap().len(), 12);

        let json = macro_chart(150.0, 70.0, 200.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["data"]["datasets"][0]["data"][1], 630.0);
    }

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_profile_from_form() {
        let profile = profile_from_form(30, 80.0, 75.0, 180.0, "female", "very_active").unwrap();
        assert_eq!(profile.sex, BiologicalSex::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_select_options_rejected() {
        let err = profile_from_form(30, 80.0, 75.0, 180.0, "M", "moderate").unwrap_err();
        assert!(matches!(err, FitError::InvalidInput { field: "sex", .. }));

        let err = profile_from_form(30, 80.0, 75.0, 180.0, "male", "athletic").unwrap_err();
        assert!(matches!(err, FitError::InvalidInput { field: "activity_level", .. }));
    }

    #[test]
    fn test_widget_exports() {
        assert_eq!(fade_in_fallback_ms(), 1000);
        let json = tooltip_position(200.0, 100.0, 40.0, 20.0, 120.0, 30.0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["top"], 160.0);
        assert_eq!(value["left"], 60.0);
    }

    #[test]
    fn test_dashboard_json() {
        let json = dashboard(30, 80.0, 75.0, 180.0, "male", "light", 9).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["assessment"]["goal_type"], "loss");
        assert_eq!(value["charts"]["water"]["data"]["labels"][0], "8am");
    }
}
