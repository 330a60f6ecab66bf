use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Category, PortfolioItem};
use crate::interaction::filter::{Filter, ALL};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub categories: Vec<Category>,
    pub items: Vec<PortfolioItem>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let filter = use_state(Filter::default);

    let button = |value: &str, label: &str| {
        let next = Filter::from_value(value);
        let is_active = *filter == next;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Filtering portfolio by {}", next.value());
                filter.set(next.clone());
            })
        };
        html! {
            <button class={classes!("filter-btn", is_active.then(|| "active"))}
                data-filter={value.to_string()}
                {onclick}>
                { label.to_string() }
            </button>
        }
    };

    html! {
        <section id="portfolio" class="portfolio-section">
            <div class="container">
                <h2>{"Selected work"}</h2>
                <div class="portfolio-filters">
                    { button(ALL, "All") }
                    { for props.categories.iter().map(|c| button(&c.slug, &c.label)) }
                </div>
                <div class="portfolio-grid">
                    { for props.items.iter().map(|item| html! {
                        <div class={classes!("portfolio-item", item.category.clone())} style={filter.display(item)}>
                            <img src={item.image.clone()} alt={item.title.clone()} />
                            <div class="portfolio-overlay">
                                <h3>{ &item.title }</h3>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
