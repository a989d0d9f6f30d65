//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;

use factory_macros::value_object;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 校验值是否合法
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 事件流版本号（乐观并发令牌）
///
/// 等于该事件流中曾经追加过的事件数量，初始为 0。
///
/// # 示例
///
/// ```
/// use factory_domain::value_object::Version;
///
/// let v0 = Version::new();
/// assert!(v0.is_new());
///
/// let v3 = v0.advance(3);
/// assert_eq!(v3.value(), 3);
/// assert_eq!(v3.to_string(), "v3");
/// assert!(v3 > v0);
/// ```
// value_object 宏提供基础派生，Version 额外需要 Copy 与全序
#[value_object]
#[derive(Copy, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    /// 初始版本（空事件流）
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// 下一个版本号
    pub fn next(&self) -> Self {
        self.advance(1)
    }

    /// 追加 `count` 个事件后的版本号
    pub fn advance(&self, count: usize) -> Self {
        Self(self.0 + count)
    }

    pub const fn value(&self) -> usize {
        self.0
    }

    /// 是否为初始版本（尚未追加任何事件）
    pub fn is_new(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<Version> for usize {
    fn from(version: Version) -> Self {
        version.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_new() {
        let v = Version::new();
        assert_eq!(v.value(), 0);
        assert!(v.is_new());
        assert_eq!(v, Version::default());
    }

    #[test]
    fn test_version_next_and_advance() {
        let v1 = Version::from_value(10);
        assert_eq!(v1.next().value(), 11);
        assert_eq!(v1.advance(0), v1);
        assert_eq!(v1.advance(4).value(), 14);
        assert_eq!(Version::new().next().next().next().value(), 3);
    }

    #[test]
    fn test_version_ordering() {
        let v0 = Version::from_value(0);
        let v1 = Version::from_value(1);
        let v2 = Version::from_value(2);

        assert!(v1 > v0);
        assert!(v2 >= v1);
        assert!(v0 < v2);
    }

    #[test]
    fn test_version_display() {
        assert_eq!(format!("{}", Version::new()), "v0");
        assert_eq!(format!("{}", Version::from_value(5)), "v5");
    }

    #[test]
    fn test_version_conversions() {
        let v: Version = 42.into();
        assert_eq!(v.value(), 42);
        let n: usize = v.into();
        assert_eq!(n, 42);
    }

    #[test]
    fn test_version_serde() {
        let v = Version::from_value(42);

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "42");

        let deserialized: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, v);
    }
}
