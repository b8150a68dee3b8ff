use yew::prelude::*;

/// Moves `index` by `delta` slides, wrapping at both ends.
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<String>,
    #[prop_or_else(|| "Masson House".to_string())]
    pub alt_prefix: String,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let current = use_state(|| 0usize);
    let len = props.images.len();

    let prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(step(*current, len, -1)))
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(step(*current, len, 1)))
    };

    html! {
        <div class="carousel-frame">
            <div class="carousel">
                {
                    props.images.iter().enumerate().map(|(i, src)| {
                        html! {
                            <img
                                key={i}
                                src={src.clone()}
                                alt={format!("{} {}", props.alt_prefix, i + 1)}
                                class={classes!("carousel-slide", (i == *current).then(|| "active"))}
                            />
                        }
                    }).collect::<Html>()
                }
                <button class="carousel-arrow prev" onclick={prev} aria-label="Previous">{"‹"}</button>
                <button class="carousel-arrow next" onclick={next} aria-label="Next">{"›"}</button>
            </div>
            <div class="carousel-dots">
                {
                    (0..len).map(|i| {
                        let current = current.clone();
                        let active = i == *current;
                        html! {
                            <button
                                key={i}
                                class={classes!("carousel-dot", active.then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| current.set(i))}
                                aria-label={format!("Go to image {}", i + 1)}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .carousel-frame {
                    width: 100%;
                    max-width: 28rem;
                    border-radius: 12px;
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    background: linear-gradient(135deg, rgba(0,0,0,0.4), rgba(0,0,0,0.2));
                    padding: 8px;
                }
                .carousel {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 8px;
                    overflow: hidden;
                }
                .carousel-slide {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.7s;
                }
                .carousel-slide.active {
                    opacity: 1;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(0,0,0,0.3);
                    color: #fff;
                    cursor: pointer;
                }
                .carousel-arrow:hover {
                    background: rgba(0,0,0,0.5);
                }
                .carousel-arrow.prev { left: 12px; }
                .carousel-arrow.next { right: 12px; }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 8px;
                    margin-top: 12px;
                }
                .carousel-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 9999px;
                    border: none;
                    background: rgba(96, 165, 250, 0.3);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .carousel-dot.active {
                    width: 32px;
                    background: #60a5fa;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn step_wraps_forward_and_back() {
        assert_eq!(step(5, 6, 1), 0);
        assert_eq!(step(0, 6, -1), 5);
        assert_eq!(step(2, 6, 1), 3);
        assert_eq!(step(2, 6, -8), 0);
    }

    #[test]
    fn repeated_images_are_separate_slides() {
        let images = ["/a.jpeg", "/a.jpeg", "/b.jpeg"];
        let mut index = 0;
        let mut visited = vec![index];
        for _ in 1..images.len() {
            index = step(index, images.len(), 1);
            visited.push(index);
        }
        assert_eq!(visited, vec![0, 1, 2]);
        assert_eq!(step(index, images.len(), 1), 0);
    }

    #[test]
    fn step_on_empty_carousel_stays_at_zero() {
        assert_eq!(step(0, 0, 1), 0);
        assert_eq!(step(0, 0, -1), 0);
    }
}
