use yew::prelude::*;

use crate::config::REVEAL_VIEW_RATIO;
use crate::content::ProcessStep;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
struct StepProps {
    number: usize,
    step: ProcessStep,
}

#[function_component(Step)]
fn step(props: &StepProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), REVEAL_VIEW_RATIO);

    html! {
        <div class={classes!("process-step", revealed.then(|| "animate"))} ref={node}>
            <div class="step-number">{ format!("{:02}", props.number) }</div>
            <h3>{ &props.step.title }</h3>
            <p>{ &props.step.body }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessProps {
    pub steps: Vec<ProcessStep>,
}

#[function_component(Process)]
pub fn process(props: &ProcessProps) -> Html {
    html! {
        <section id="process" class="process-section">
            <div class="container">
                <h2>{"How we work"}</h2>
                <div class="process-steps">
                    { for props.steps.iter().enumerate().map(|(i, step)| html! {
                        <Step number={i + 1} step={step.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
