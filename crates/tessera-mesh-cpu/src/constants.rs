pub(crate) const OPAQUE_ALPHA: u8 = 255;
/// Visual-only lighting floor to avoid pitch-black faces in darkness.
/// Does not affect logical light propagation.
pub(crate) const VISUAL_LIGHT_MIN: u8 = 18; // ~7% brightness floor
