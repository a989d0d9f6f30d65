//! 车型蓝图及其查询协议（外部协作者）
//!
use super::cargo::CarPart;
use std::sync::Arc;

/// 某车型生产所需的零件清单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarBlueprint {
    pub design_name: String,
    pub required_parts: Vec<CarPart>,
}

impl CarBlueprint {
    pub fn new(design_name: impl Into<String>, required_parts: Vec<CarPart>) -> Self {
        Self {
            design_name: design_name.into(),
            required_parts,
        }
    }
}

/// 按车型名查询蓝图；未知车型返回 `None`
pub trait CarBlueprintLibrary: Send + Sync {
    fn blueprint_for(&self, model: &str) -> Option<CarBlueprint>;
}

impl<T> CarBlueprintLibrary for Arc<T>
where
    T: CarBlueprintLibrary + ?Sized,
{
    fn blueprint_for(&self, model: &str) -> Option<CarBlueprint> {
        (**self).blueprint_for(model)
    }
}

impl<T> CarBlueprintLibrary for &T
where
    T: CarBlueprintLibrary + ?Sized,
{
    fn blueprint_for(&self, model: &str) -> Option<CarBlueprint> {
        (**self).blueprint_for(model)
    }
}
