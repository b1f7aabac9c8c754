//! HTTP API Client
//!
//! Functions for communicating with the MedGraph REST API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("medgraph_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("medgraph_api_url", url);
        }
    }
}

// ============ Response Types ============

/// A disease record from the Wikidata-backed directory
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub icd10: String,
    pub subclass_of: String,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub fatality_rate: String,
    #[serde(default)]
    pub diagnostic_methods: Vec<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub related_genes: Vec<String>,
}

/// A hospital record for the selected country
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Hospital {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub wikimedia_url: Option<String>,
    pub wikidata_url: String,
    #[serde(default)]
    pub image: Option<String>,
    pub address: String,
}

/// One node of the drug-disease relation graph.
///
/// Disease nodes carry an empty `link`; drug nodes link to the item URI of
/// the disease they treat. `color` is a hex RGB string without the `#`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct GraphNode {
    pub item: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, serde::Deserialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    detail: String,
}

// ============ API Functions ============

/// Fetch the disease directory
pub async fn fetch_diseases() -> Result<Vec<Disease>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/diseases", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Send a message to the medical adviser and return its reply
pub async fn send_chat(message: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Adviser is unavailable".to_string() });
        return Err(error.detail);
    }

    let chat_response: ChatResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(chat_response.reply)
}

/// Fetch hospitals for a country (Wikidata QID, e.g. `Q212`)
pub async fn fetch_hospitals(country: &str) -> Result<Vec<Hospital>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/hospitals?country={}", api_base, country))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the flat node list of the drug-disease graph
pub async fn fetch_drug_disease_graph() -> Result<Vec<GraphNode>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/drug-disease", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Unknown error".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_decodes_from_api_shape() {
        let json = r#"{
            "id": "Q12204",
            "name": "tuberculosis",
            "url": "https://www.wikidata.org/wiki/Q12204",
            "description": "infectious disease",
            "icd10": "A15",
            "subclass_of": "mycobacterium infectious disease",
            "causes": ["Mycobacterium tuberculosis"],
            "symptoms": ["cough", "fever"],
            "fatality_rate": "N/A",
            "diagnostic_methods": ["chest X-ray"],
            "treatments": ["isoniazid"],
            "related_genes": []
        }"#;

        let disease: Disease = serde_json::from_str(json).unwrap();
        assert_eq!(disease.id, "Q12204");
        assert_eq!(disease.symptoms.len(), 2);
        assert!(disease.related_genes.is_empty());
    }

    #[test]
    fn test_hospital_decodes_with_missing_optionals() {
        let json = r#"{
            "name": "City Hospital",
            "latitude": 50.45,
            "longitude": 30.52,
            "description": "No description available",
            "website": null,
            "wikidata_url": "https://www.wikidata.org/wiki/Q1",
            "address": "Coordinates: 50.45, 30.52"
        }"#;

        let hospital: Hospital = serde_json::from_str(json).unwrap();
        assert_eq!(hospital.name, "City Hospital");
        assert!(hospital.website.is_none());
        assert!(hospital.image.is_none());
    }

    #[test]
    fn test_graph_node_link_defaults_to_empty() {
        let json = r#"{
            "item": "http://www.wikidata.org/entity/Q12204",
            "label": "tuberculosis",
            "color": "FFA500"
        }"#;

        let node: GraphNode = serde_json::from_str(json).unwrap();
        assert!(node.link.is_empty());
    }
}

// Storage-backed tests, run with `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_round_trips_through_storage() {
        set_api_base("http://backend.test/api");
        assert_eq!(get_api_base(), "http://backend.test/api");
        set_api_base(DEFAULT_API_BASE);
    }

    #[wasm_bindgen_test]
    fn test_api_base_trailing_slash_is_normalized_on_read() {
        set_api_base("http://backend.test/api/");
        assert_eq!(get_api_base(), "http://backend.test/api");
        set_api_base(DEFAULT_API_BASE);
    }
}
