use crate::error::{KundaliError, KundaliResult};
use crate::render::Renderer;

use super::chart_model::ChartModel;
use super::chart_presentation::ChartPresentationState;
use super::chart_runtime::ChartRuntimeState;
use super::engine_core::EngineCore;
use super::{KundaliEngine, KundaliEngineConfig};

impl<R: Renderer> KundaliEngine<R> {
    /// Creates an engine with an empty chart installed. Layout queries
    /// and rendering work immediately and produce the bare skeleton.
    pub fn new(renderer: R, config: KundaliEngineConfig) -> KundaliResult<Self> {
        if !config.viewport.is_valid() {
            return Err(KundaliError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            core: EngineCore {
                model: ChartModel::bootstrap(config.viewport, config.grid_style),
                presentation: ChartPresentationState::default(),
                runtime: ChartRuntimeState::bootstrap(),
            },
        })
    }
}
