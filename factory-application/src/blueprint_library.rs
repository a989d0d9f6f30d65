use dashmap::DashMap;
use factory_domain::factory::{CarBlueprint, CarBlueprintLibrary, CarPart};
use tracing::debug;

/// 基于内存的车型蓝图目录
/// - 以车型名为键，可在运行期并发登记或移除
/// - 蓝图的设计名即车型名
#[derive(Debug, Default)]
pub struct InMemoryBlueprintLibrary {
    designs: DashMap<String, Vec<CarPart>>,
}

impl InMemoryBlueprintLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置 `Ford` 与 `audi` 两种车型
    pub fn with_standard_models() -> Self {
        let library = Self::new();
        library.record_blueprint(
            "Ford",
            vec![
                CarPart::new("chassis", 1),
                CarPart::new("wheels", 4),
                CarPart::new("engine", 1),
            ],
        );
        library.record_blueprint(
            "audi",
            vec![
                CarPart::new("chassis", 1),
                CarPart::new("wheels", 4),
                CarPart::new("engine", 1),
                CarPart::new("battery", 2),
            ],
        );
        library
    }

    /// 登记车型所需零件，返回被替换的旧清单
    pub fn record_blueprint(
        &self,
        model: impl Into<String>,
        parts: Vec<CarPart>,
    ) -> Option<Vec<CarPart>> {
        let model = model.into();
        debug!(model = %model, parts = parts.len(), "blueprint recorded");
        self.designs.insert(model, parts)
    }

    pub fn remove_blueprint(&self, model: &str) -> Option<Vec<CarPart>> {
        self.designs.remove(model).map(|(_, parts)| parts)
    }

    /// 已登记的车型名（按名称排序）
    pub fn models(&self) -> Vec<String> {
        let mut models: Vec<String> = self.designs.iter().map(|e| e.key().clone()).collect();
        models.sort();
        models
    }
}

impl CarBlueprintLibrary for InMemoryBlueprintLibrary {
    fn blueprint_for(&self, model: &str) -> Option<CarBlueprint> {
        self.designs
            .get(model)
            .map(|parts| CarBlueprint::new(model, parts.value().clone()))
    }
}
