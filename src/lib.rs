// Export modules for library usage
pub mod analytics;
pub mod color;
pub mod core;
pub mod format;
pub mod io;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Deal, DealDraft, DealId, InsuranceLine, Quarter, QuarterlyPremiums, Salesperson, Stage,
};

pub use crate::store::{DealStore, StoreError, ValidationIssue};

pub use crate::analytics::{
    board::{by_recent_activity, kanban_columns, DealFilter, KanbanColumn},
    dimensions::{
        insurance_line_performance, rank_by_metric, salesperson_performance, top_by_volume,
        top_lines_by_count, InsuranceLinePerformance, SalesMetric, SalespersonPerformance,
    },
    radar::{radar_scores, RadarScore},
    stages::{funnel, stage_distribution, FunnelStage, StageSlice},
    stats::{pipeline_stats, PipelineStats},
    trends::{monthly_trends, monthly_trends_at, MonthlyTrend},
};

pub use crate::io::archive::{
    parse_import, ExportArchive, ImportArchive, ImportError, ImportPreview, APP_NAME,
};

pub use crate::io::storage::{
    clear_deals, load_deals, save_deals, JsonFileBackend, MemoryBackend, StorageBackend,
    STORAGE_KEY,
};
