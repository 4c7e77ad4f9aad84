mod chart_panel;
mod footer_bar;
mod header_bar;
mod nav_bar;
mod poster_pane;
mod progress_bar;
mod stats_view;

pub use chart_panel::{ChartPanel, ChartPanelStyle};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use nav_bar::{NavBar, NavBarState, NavBarStyle, NavTarget};
pub use poster_pane::{PosterPane, PosterPaneStyle};
pub use progress_bar::ProgressBar;
pub use stats_view::{StatsView, StatsViewStyle};
