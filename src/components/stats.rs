use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_VIEW_RATIO, FRAME_MS};
use crate::content::Stat;
use crate::hooks::use_in_view;
use crate::interaction::counter::CountUp;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    /// Flips to true once; the count-up never restarts.
    pub start: bool,
}

fn run_frame(count: Rc<RefCell<CountUp>>, shown: UseStateHandle<u32>) {
    let frame = count.borrow_mut().step();
    shown.set(frame.shown);
    if !frame.finished {
        Timeout::new(FRAME_MS, move || run_frame(count, shown)).forget();
    }
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let shown = use_state(|| 0u32);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(start, target)| {
                if *start {
                    let count = Rc::new(RefCell::new(CountUp::new(*target, COUNTER_DURATION_MS, FRAME_MS)));
                    run_frame(count, shown);
                }
                || ()
            },
            (props.start, props.target),
        );
    }

    html! {
        <span class="counter" data-target={props.target.to_string()}>{ *shown }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub stats: Vec<Stat>,
}

#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let section = use_node_ref();
    let counting = use_in_view(section.clone(), COUNTER_VIEW_RATIO);

    use_effect_with_deps(
        |counting| {
            if *counting {
                debug!("Stats in view, starting counters");
            }
            || ()
        },
        counting,
    );

    html! {
        <section id="about" class="about-section" ref={section}>
            <div class="container">
                <h2>{"About Brightline"}</h2>
                <p class="section-intro">
                    {"We are a small studio of strategists, designers and filmmakers who help growing companies look and sound like the best version of themselves."}
                </p>
                <div class="stats">
                    { for props.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">
                                <Counter target={stat.target} start={counting} />
                                { &stat.suffix }
                            </div>
                            <div class="stat-label">{ &stat.label }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
