#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod functions;
pub mod geom;
pub mod graph;

use std::fmt;

use functions::{FunctionCatalog, FunctionKind};
use graph::GridTransitionEngine;
use graph::config::GraphConfig;
use graph::evaluator::flatten_positions;
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Start de rayon-threadpool voor de `parallel`-build. Zonder `worker_count`
/// wordt de beschikbare parallelliteit gebruikt. Geeft de promise terug die
/// resolvet zodra de workers klaarstaan.
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub fn initialize_parallel(worker_count: Option<u32>) -> JsValue {
    let threads = worker_threads(worker_count);
    debug_log!("rayon-threadpool met {threads} workers");
    wasm_bindgen_rayon::init_thread_pool(threads).into()
}

#[cfg_attr(not(all(feature = "parallel", target_arch = "wasm32")), allow(dead_code))]
fn worker_threads(worker_count: Option<u32>) -> usize {
    worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .ok()
        })
        .unwrap_or(1)
}

#[derive(Debug, Serialize)]
struct FunctionExport {
    index: usize,
    name: &'static str,
    aliases: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateExport {
    active: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    incoming: Option<&'static str>,
    is_transitioning: bool,
    elapsed_since_switch: f64,
    elapsed_in_transition: f64,
}

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    inner: GridTransitionEngine,
    pending_selection: Option<FunctionKind>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            inner: GridTransitionEngine::default(),
            pending_selection: None,
        }
    }

    /// Vervang de configuratie door een JS-object met `resolution`,
    /// `automaticTransition`, `functionDuration`, `lerpDuration` en
    /// `initialFunction`. Ontbrekende velden krijgen hun standaardwaarde.
    #[wasm_bindgen]
    pub fn configure(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: GraphConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        self.apply_config(config).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn resolution(&self) -> usize {
        self.inner.grid().resolution()
    }

    #[wasm_bindgen]
    pub fn cell_count(&self) -> usize {
        self.inner.grid().cell_count()
    }

    /// Uniforme schaal voor elk punt, gelijk op alle drie de assen.
    #[wasm_bindgen]
    pub fn point_scale(&self) -> f64 {
        self.inner.grid().grad()
    }

    #[wasm_bindgen]
    pub fn active_function(&self) -> String {
        self.inner.state().active().name().to_owned()
    }

    #[wasm_bindgen]
    pub fn is_transitioning(&self) -> bool {
        self.inner.state().is_transitioning()
    }

    /// Kies een functie op naam, alias of catalogusindex.
    #[wasm_bindgen]
    pub fn select_function(&mut self, id_or_name: &str) -> Result<(), JsValue> {
        let trimmed = id_or_name.trim();
        if trimmed.is_empty() {
            return Err(js_error("lege functiereferentie"));
        }

        let kind = match trimmed.parse::<usize>() {
            Ok(index) => FunctionKind::from_ordinal(index),
            Err(_) => FunctionCatalog::global()
                .resolve(trimmed)
                .ok_or_else(|| js_error("onbekende functiereferentie"))?,
        };

        self.pending_selection = Some(kind);
        Ok(())
    }

    /// Kies een functie op catalogusindex; buiten bereik valt terug op index 0.
    #[wasm_bindgen]
    pub fn select_function_index(&mut self, index: usize) {
        self.pending_selection = Some(FunctionKind::from_ordinal(index));
    }

    #[wasm_bindgen]
    pub fn set_automatic_transition(&mut self, enabled: bool) {
        self.inner.set_automatic_transition(enabled);
    }

    #[wasm_bindgen]
    pub fn set_function_duration(&mut self, seconds: f64) -> Result<(), JsValue> {
        self.inner.set_function_duration(seconds).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn set_lerp_duration(&mut self, seconds: f64) -> Result<(), JsValue> {
        self.inner.set_lerp_duration(seconds).map_err(to_js_error)
    }

    /// Evalueer één frame en geef de posities plat terug als `[x0, y0, z0, x1, ...]`.
    #[wasm_bindgen]
    pub fn step(&mut self, now: f64, dt: f64) -> Vec<f64> {
        let selected = self
            .pending_selection
            .take()
            .unwrap_or_else(|| self.inner.state().active());
        let positions = self.inner.evaluate_frame(selected, now, dt);
        flatten_positions(&positions)
    }

    /// Haal de functiecatalogus op voor UI-generatie.
    #[wasm_bindgen]
    pub fn get_functions(&self) -> Result<JsValue, JsValue> {
        let functions: Vec<FunctionExport> = FunctionCatalog::global()
            .entries()
            .iter()
            .map(|entry| FunctionExport {
                index: entry.kind.ordinal(),
                name: entry.kind.name(),
                aliases: entry.names,
            })
            .collect();

        serde_wasm_bindgen::to_value(&functions).map_err(|err| JsError::new(&err.to_string()).into())
    }

    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let state = self.inner.state();
        let export = StateExport {
            active: state.active().name(),
            incoming: state.incoming(FunctionCatalog::global()).map(FunctionKind::name),
            is_transitioning: state.is_transitioning(),
            elapsed_since_switch: state.elapsed_since_switch(),
            elapsed_in_transition: state.elapsed_in_transition(),
        };

        serde_wasm_bindgen::to_value(&export).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl Engine {
    /// Vervangt de configuratie; de overgangstoestand begint opnieuw.
    pub fn apply_config(&mut self, config: GraphConfig) -> Result<(), graph::config::ConfigError> {
        self.inner = GridTransitionEngine::new(config)?;
        self.pending_selection = None;
        debug_log!("engine geconfigureerd: resolutie {}", self.inner.grid().resolution());
        Ok(())
    }

    #[must_use]
    pub fn inner(&self) -> &GridTransitionEngine {
        &self.inner
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
