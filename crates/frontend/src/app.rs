use crate::domain::a001_product::ui::list::ProductList;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app">
                <ProductList />
            </main>
        </ConfigProvider>
    }
}
