use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::slider::Slider;
use crate::components::{
    anchor::AnchorLink,
    back_to_top::BackToTop,
    contact_form::ContactForm,
    lightbox::VideoLightbox,
    portfolio::Portfolio,
    process::Process,
    stats::Stats,
};
use crate::config::{HERO_PERIOD_MS, TESTIMONIAL_PERIOD_MS};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;

    html! {
        <main class="home">
            <section id="home" class="hero-section">
                <Slider class="hero-slider" slide_class="slide" dots_class="slide-dots"
                    period_ms={HERO_PERIOD_MS} arrows=true>
                    { for content.hero_slides.iter().map(|slide| html! {
                        <div class="slide-inner" style={format!("background-image: url('{}');", slide.image)}>
                            <div class="slide-content">
                                <h1>{ &slide.title }</h1>
                                <p>{ &slide.subtitle }</p>
                                <AnchorLink href={slide.cta_href.clone()} class="btn btn-primary">
                                    { &slide.cta_label }
                                </AnchorLink>
                            </div>
                        </div>
                    }) }
                </Slider>
            </section>

            <Stats stats={content.stats.clone()} />

            <Process steps={content.process.clone()} />

            <section class="video-section">
                <div class="container">
                    <h2>{"See us at work"}</h2>
                    <VideoLightbox video_id={content.video_id.clone()} thumbnail="/assets/showreel.jpg" />
                </div>
            </section>

            <Portfolio categories={content.categories.clone()} items={content.portfolio.clone()} />

            <section id="testimonials" class="testimonials-section">
                <div class="container">
                    <h2>{"What clients say"}</h2>
                    <Slider class="testimonial-slider" slide_class="testimonial-slide" dots_class="testimonial-dots"
                        period_ms={TESTIMONIAL_PERIOD_MS}>
                        { for content.testimonials.iter().map(|t| html! {
                            <blockquote>
                                <p class="quote">{ &t.quote }</p>
                                <footer>
                                    <strong>{ &t.author }</strong>
                                    <span>{ &t.role }</span>
                                </footer>
                            </blockquote>
                        }) }
                    </Slider>
                </div>
            </section>

            <ContactForm />

            <footer class="site-footer">
                <p>{"© Brightline Studio"}</p>
            </footer>

            <BackToTop />
        </main>
    }
}
