//! Drug-Disease Graph Page
//!
//! Bipartite graph of drugs and the diseases they treat, drawn on an HTML5
//! Canvas. The backend returns a flat node list; edge derivation happens
//! client-side in `build_graph`.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::{self, GraphNode};
use crate::components::{ErrorBanner, Loading};

/// Node fill for disease entries
const DISEASE_COLOR: &str = "#FFA500";
/// Node fill for drug entries
const DRUG_COLOR: &str = "#7FFF00";
/// Edge stroke color
const EDGE_COLOR: &str = "#4B5563";

/// Drug-disease graph split into its two node columns plus the edge set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphColumns {
    /// Disease nodes, deduplicated by item URI
    pub diseases: Vec<GraphNode>,
    /// Drug nodes, deduplicated by item URI
    pub drugs: Vec<GraphNode>,
    /// Edges as (drug index, disease index) pairs
    pub edges: Vec<(usize, usize)>,
}

/// Split the flat node list into disease and drug columns and derive edges.
///
/// Disease rows carry an empty `link`; drug rows link to the item URI of the
/// disease they treat and may appear once per treated disease. Links that
/// point at no disease row in the same payload are dropped.
pub fn build_graph(nodes: &[GraphNode]) -> GraphColumns {
    let mut columns = GraphColumns::default();

    for node in nodes {
        if node.link.is_empty() && !columns.diseases.iter().any(|d| d.item == node.item) {
            columns.diseases.push(node.clone());
        }
    }

    for node in nodes {
        if node.link.is_empty() {
            continue;
        }

        let drug_idx = match columns.drugs.iter().position(|d| d.item == node.item) {
            Some(idx) => idx,
            None => {
                columns.drugs.push(node.clone());
                columns.drugs.len() - 1
            }
        };

        if let Some(disease_idx) = columns.diseases.iter().position(|d| d.item == node.link) {
            let edge = (drug_idx, disease_idx);
            if !columns.edges.contains(&edge) {
                columns.edges.push(edge);
            }
        }
    }

    columns
}

/// Drug-disease graph page component
#[component]
pub fn DrugDiseaseGraph() -> impl IntoView {
    let (columns, set_columns) = create_signal(GraphColumns::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    spawn_local(async move {
        match api::fetch_drug_disease_graph().await {
            Ok(nodes) => set_columns.set(build_graph(&nodes)),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    // Redraw whenever the data lands
    create_effect(move |_| {
        let graph = columns.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_graph(&canvas, &graph);
        }
    });

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Drug-Disease Graph"</h1>
                <p class="text-gray-400 mt-1">"Which drugs treat which diseases"</p>
            </div>

            <ErrorBanner error=error />

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Legend and counts
                <div class="flex items-center justify-between text-sm">
                    <div class="flex items-center space-x-6">
                        <span class="flex items-center space-x-2">
                            <span
                                class="w-3 h-3 rounded-full inline-block"
                                style=format!("background-color: {}", DISEASE_COLOR)
                            />
                            <span class="text-gray-300">"Disease"</span>
                        </span>
                        <span class="flex items-center space-x-2">
                            <span
                                class="w-3 h-3 rounded-full inline-block"
                                style=format!("background-color: {}", DRUG_COLOR)
                            />
                            <span class="text-gray-300">"Drug"</span>
                        </span>
                    </div>

                    <span class="text-gray-400">
                        {move || {
                            let graph = columns.get();
                            format!(
                                "{} diseases · {} drugs · {} links",
                                graph.diseases.len(),
                                graph.drugs.len(),
                                graph.edges.len(),
                            )
                        }}
                    </span>
                </div>

                {move || loading.get().then(|| view! { <Loading label="Loading graph data..." /> })}

                <canvas
                    node_ref=canvas_ref
                    width="900"
                    height="600"
                    class="w-full rounded-lg"
                />
            </section>
        </div>
    }
}

/// Draw the bipartite layout: diseases in the left column, drugs in the
/// right, straight edges between.
fn draw_graph(canvas: &HtmlCanvasElement, graph: &GraphColumns) {
    // Grow the canvas with the node count so labels stay readable
    let rows = graph.diseases.len().max(graph.drugs.len());
    canvas.set_height(((rows as u32) * 24 + 60).max(300));

    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#111827".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if rows == 0 {
        return;
    }

    let disease_x = width * 0.22;
    let drug_x = width * 0.78;
    let y_of = |idx: usize, count: usize| -> f64 {
        let usable = height - 60.0;
        30.0 + usable * (idx as f64 + 0.5) / (count.max(1) as f64)
    };

    // Edges first so nodes draw on top
    ctx.set_stroke_style(&EDGE_COLOR.into());
    ctx.set_line_width(1.0);
    for (drug_idx, disease_idx) in &graph.edges {
        ctx.begin_path();
        ctx.move_to(drug_x, y_of(*drug_idx, graph.drugs.len()));
        ctx.line_to(disease_x, y_of(*disease_idx, graph.diseases.len()));
        ctx.stroke();
    }

    ctx.set_font("12px sans-serif");

    for (idx, disease) in graph.diseases.iter().enumerate() {
        let y = y_of(idx, graph.diseases.len());
        ctx.set_fill_style(&DISEASE_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(disease_x, y, 5.0, 0.0, std::f64::consts::TAU);
        ctx.fill();

        ctx.set_fill_style(&"#D1D5DB".into());
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&disease.label, disease_x - 12.0, y + 4.0);
    }

    for (idx, drug) in graph.drugs.iter().enumerate() {
        let y = y_of(idx, graph.drugs.len());
        ctx.set_fill_style(&DRUG_COLOR.into());
        ctx.begin_path();
        let _ = ctx.arc(drug_x, y, 5.0, 0.0, std::f64::consts::TAU);
        ctx.fill();

        ctx.set_fill_style(&"#D1D5DB".into());
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&drug.label, drug_x + 12.0, y + 4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disease(item: &str, label: &str) -> GraphNode {
        GraphNode {
            item: item.to_string(),
            label: label.to_string(),
            color: "FFA500".to_string(),
            link: String::new(),
        }
    }

    fn drug(item: &str, label: &str, link: &str) -> GraphNode {
        GraphNode {
            item: item.to_string(),
            label: label.to_string(),
            color: "7FFF00".to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_build_graph_splits_columns_and_links() {
        let nodes = vec![
            disease("wd:Q1", "influenza"),
            disease("wd:Q2", "tuberculosis"),
            drug("wd:D1", "oseltamivir", "wd:Q1"),
            drug("wd:D2", "isoniazid", "wd:Q2"),
        ];

        let graph = build_graph(&nodes);
        assert_eq!(graph.diseases.len(), 2);
        assert_eq!(graph.drugs.len(), 2);
        assert_eq!(graph.edges, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_build_graph_dedupes_repeated_nodes() {
        // A drug treating two diseases arrives as two rows with the same item
        let nodes = vec![
            disease("wd:Q1", "influenza"),
            disease("wd:Q1", "influenza"),
            disease("wd:Q2", "pneumonia"),
            drug("wd:D1", "amantadine", "wd:Q1"),
            drug("wd:D1", "amantadine", "wd:Q2"),
        ];

        let graph = build_graph(&nodes);
        assert_eq!(graph.diseases.len(), 2);
        assert_eq!(graph.drugs.len(), 1);
        assert_eq!(graph.edges, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_build_graph_drops_dangling_links() {
        let nodes = vec![
            disease("wd:Q1", "influenza"),
            drug("wd:D1", "oseltamivir", "wd:Q404"),
        ];

        let graph = build_graph(&nodes);
        assert_eq!(graph.drugs.len(), 1, "drug node survives a dangling link");
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_build_graph_empty_input() {
        assert_eq!(build_graph(&[]), GraphColumns::default());
    }
}
