use log::{debug, info};
use yew::prelude::*;

use super::controller::Carousel;
use super::timer::{IntervalScheduler, Scheduler};

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    /// Container class, e.g. `hero-slider`.
    pub class: &'static str,
    /// Class given to every slide wrapper, e.g. `slide`.
    pub slide_class: &'static str,
    /// Class given to the indicator row, e.g. `slide-dots`.
    pub dots_class: &'static str,
    pub period_ms: u32,
    #[prop_or_default]
    pub arrows: bool,
    #[prop_or_default]
    pub children: Children,
}

pub enum SliderMsg {
    Prev,
    Next,
    Select(usize),
    Tick,
}

pub struct Slider {
    carousel: Option<Carousel<IntervalScheduler>>,
}

/// Replaces the carousel when the slide count no longer matches. The old one
/// is dropped before the new one starts so only one timer is ever live.
fn refit<S, F>(slot: &mut Option<Carousel<S>>, len: usize, build: F) -> bool
where
    S: Scheduler,
    F: FnOnce(usize) -> Option<Carousel<S>>,
{
    if slot.as_ref().map_or(0, |carousel| carousel.len()) == len {
        return false;
    }
    *slot = None;
    *slot = build(len);
    true
}

impl Slider {
    fn build(ctx: &Context<Self>, len: usize) -> Option<Carousel<IntervalScheduler>> {
        let props = ctx.props();
        let tick = ctx.link().callback(|_| SliderMsg::Tick);
        let carousel = Carousel::new(len, props.period_ms, IntervalScheduler, tick);
        match &carousel {
            Some(c) => debug!("{} started with {} slides every {}ms", props.class, c.len(), props.period_ms),
            None => info!("{} has no slides, skipping", props.class),
        }
        carousel
    }
}

impl Component for Slider {
    type Message = SliderMsg;
    type Properties = SliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            carousel: Self::build(ctx, ctx.props().children.len()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let len = ctx.props().children.len();
        if refit(&mut self.carousel, len, |len| Self::build(ctx, len)) {
            debug!("{} now has {} slides", ctx.props().class, len);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            return false;
        };
        match msg {
            SliderMsg::Prev => carousel.prev(),
            SliderMsg::Next => carousel.next(),
            SliderMsg::Select(index) => carousel.select(index),
            SliderMsg::Tick => carousel.tick(),
        }
        debug!("{} showing slide {}", ctx.props().class, carousel.active());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(carousel) = self.carousel.as_ref() else {
            return html! { <div class={props.class}></div> };
        };

        let slides = props.children.iter().enumerate().map(|(index, child)| {
            html! {
                <div class={classes!(props.slide_class, carousel.is_active(index).then(|| "active"))}>
                    { child }
                </div>
            }
        });

        let dots = (0..carousel.len()).map(|index| {
            html! {
                <span
                    class={classes!("dot", carousel.is_active(index).then(|| "active"))}
                    onclick={ctx.link().callback(move |_| SliderMsg::Select(index))}
                />
            }
        });

        html! {
            <div class={props.class}>
                { for slides }
                if props.arrows {
                    <button class="prev-slide" aria-label="Previous slide"
                        onclick={ctx.link().callback(|_| SliderMsg::Prev)}>
                        {"‹"}
                    </button>
                    <button class="next-slide" aria-label="Next slide"
                        onclick={ctx.link().callback(|_| SliderMsg::Next)}>
                        {"›"}
                    </button>
                }
                <div class={props.dots_class}>
                    { for dots }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::{tick_counter, ManualClock};

    fn builder(clock: &ManualClock) -> impl Fn(usize) -> Option<Carousel<ManualClock>> + '_ {
        move |len| {
            let (tick, _) = tick_counter();
            Carousel::new(len, 5000, clock.clone(), tick)
        }
    }

    #[test]
    fn same_slide_count_keeps_the_carousel() {
        let clock = ManualClock::default();
        let build = builder(&clock);
        let mut slot = build(3);
        slot.as_mut().unwrap().select(2);

        assert!(!refit(&mut slot, 3, &build));
        assert_eq!(slot.as_ref().unwrap().active(), 2);
        assert_eq!(clock.outstanding(), 1);
    }

    #[test]
    fn new_slide_count_rebuilds_with_one_timer() {
        let clock = ManualClock::default();
        let build = builder(&clock);
        let mut slot = build(3);

        assert!(refit(&mut slot, 5, &build));
        let carousel = slot.as_ref().unwrap();
        assert_eq!(carousel.len(), 5);
        assert_eq!(carousel.active(), 0);
        assert_eq!(clock.outstanding(), 1);
    }

    #[test]
    fn losing_every_slide_stops_the_timer() {
        let clock = ManualClock::default();
        let build = builder(&clock);
        let mut slot = build(3);

        assert!(refit(&mut slot, 0, &build));
        assert!(slot.is_none());
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn slides_arriving_later_start_the_carousel() {
        let clock = ManualClock::default();
        let build = builder(&clock);
        let mut slot = build(0);
        assert_eq!(clock.outstanding(), 0);

        assert!(refit(&mut slot, 2, &build));
        assert_eq!(slot.as_ref().unwrap().len(), 2);
        assert_eq!(clock.outstanding(), 1);
    }
}
