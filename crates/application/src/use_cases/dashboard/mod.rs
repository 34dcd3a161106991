mod render;

pub use render::RenderDashboardUseCase;
