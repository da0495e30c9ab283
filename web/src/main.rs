use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::core::config::DashboardConfig;
use ui::views::Dashboard;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes to this on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    // `Teams.csv` is served next to index.html.
    use_context_provider(DashboardConfig::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the whole tree remounts with fresh strings.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            AppNavbar {}
            Dashboard {}
        }
    }
}
