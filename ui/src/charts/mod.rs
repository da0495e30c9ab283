mod axis;
pub use axis::{axis_ticks, AxisTick, BottomAxis, LeftAxis, TickFormat};

pub mod line;
pub use line::LineChart;

pub mod scatter;
pub use scatter::ScatterPlot;

pub mod tooltip;
pub use tooltip::{provide_tooltip, use_tooltip, Tooltip, TooltipContent, TooltipState};
