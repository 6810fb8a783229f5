mod verdict;

pub use verdict::{
    AnomalySeverity, ImageMetadata, ImageSize, LayoutCheck, RiskLevel, ScanMode, ScanResult,
    TemplateAnomaly,
};
