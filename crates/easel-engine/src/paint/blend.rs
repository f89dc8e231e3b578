/// Compositing operator used by `blend` and image drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Blend,
    Add,
    Darkest,
    Lightest,
    Difference,
    Exclusion,
    Multiply,
    Screen,
    /// Source replaces destination.
    Replace,
    Overlay,
    HardLight,
    SoftLight,
    Dodge,
    Burn,
}
