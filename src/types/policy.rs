//! Scale policy, quality tiers, and interpolation kernel selection.

use image::imageops::FilterType;

/// Whether frames smaller than the canvas may be enlarged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePolicy {
    /// Smaller sources are scaled up to fit the canvas.
    AllowUpscale,
    /// Smaller sources are padded, never enlarged.
    NoUpscale,
}

impl ScalePolicy {
    /// Map the caller's "allow scale up" flag to a policy.
    pub fn from_scale_up(scale_up: bool) -> Self {
        if scale_up {
            ScalePolicy::AllowUpscale
        } else {
            ScalePolicy::NoUpscale
        }
    }
}

/// Caller-selected quality level, bound to a downscale kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    /// Nearest-neighbour, pixel-art style.
    Low,
    /// Bilinear, smooth but fast.
    Medium,
    /// Lanczos, best quality.
    High,
}

impl QualityTier {
    /// Map a numeric quality input onto a tier.
    ///
    /// High above 15, Medium above 8, Low otherwise.
    pub fn from_quality(quality: u32) -> Self {
        if quality > 15 {
            QualityTier::High
        } else if quality > 8 {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }

    /// The interpolation kernel used when shrinking a frame.
    pub fn downscale_filter(self) -> FilterType {
        match self {
            QualityTier::Low => FilterType::Nearest,
            QualityTier::Medium => FilterType::Triangle,
            QualityTier::High => FilterType::Lanczos3,
        }
    }
}

/// Select the interpolation kernel for a resize.
///
/// Downscaling uses the kernel bound to the requested tier. Upscaling
/// ignores the tier: nearest-neighbour past 2x (crisp pixel scaling),
/// otherwise a smooth bicubic-equivalent kernel.
pub fn kernel_for(resize_ratio: f64, tier: QualityTier) -> FilterType {
    if resize_ratio < 1.0 {
        tier.downscale_filter()
    } else if resize_ratio > 2.0 {
        FilterType::Nearest
    } else {
        FilterType::CatmullRom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_thresholds() {
        assert_eq!(QualityTier::from_quality(0), QualityTier::Low);
        assert_eq!(QualityTier::from_quality(8), QualityTier::Low);
        assert_eq!(QualityTier::from_quality(9), QualityTier::Medium);
        assert_eq!(QualityTier::from_quality(15), QualityTier::Medium);
        assert_eq!(QualityTier::from_quality(16), QualityTier::High);
        assert_eq!(QualityTier::from_quality(100), QualityTier::High);
    }

    #[test]
    fn test_scale_policy_from_flag() {
        assert_eq!(ScalePolicy::from_scale_up(true), ScalePolicy::AllowUpscale);
        assert_eq!(ScalePolicy::from_scale_up(false), ScalePolicy::NoUpscale);
    }

    #[test]
    fn test_downscale_uses_tier_kernel() {
        assert!(matches!(
            kernel_for(0.5, QualityTier::Low),
            FilterType::Nearest
        ));
        assert!(matches!(
            kernel_for(0.5, QualityTier::Medium),
            FilterType::Triangle
        ));
        assert!(matches!(
            kernel_for(0.5, QualityTier::High),
            FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_upscale_ignores_tier() {
        // Moderate upscale: smooth kernel regardless of tier
        assert!(matches!(
            kernel_for(1.5, QualityTier::Low),
            FilterType::CatmullRom
        ));
        assert!(matches!(
            kernel_for(1.5, QualityTier::High),
            FilterType::CatmullRom
        ));

        // Past 2x: nearest-neighbour regardless of tier
        assert!(matches!(
            kernel_for(2.5, QualityTier::High),
            FilterType::Nearest
        ));
        assert!(matches!(
            kernel_for(4.0, QualityTier::Low),
            FilterType::Nearest
        ));
    }

    #[test]
    fn test_boundary_ratios() {
        // Exactly 1.0 and exactly 2.0 take the smooth upscale kernel
        assert!(matches!(
            kernel_for(1.0, QualityTier::High),
            FilterType::CatmullRom
        ));
        assert!(matches!(
            kernel_for(2.0, QualityTier::Low),
            FilterType::CatmullRom
        ));
    }
}
