use rand::Rng;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub size_px: f64,
}

impl Sparkle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..3.0),
            duration_s: rng.gen_range(2.0..5.0),
            size_px: rng.gen_range(2.0..6.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; width: {:.2}px; height: {:.2}px;",
            self.left_pct, self.top_pct, self.delay_s, self.duration_s, self.size_px, self.size_px
        )
    }
}

pub fn scatter<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count).map(|_| Sparkle::random(rng)).collect()
}

#[derive(Properties, PartialEq)]
pub struct SparklesProps {
    pub sparkles: Vec<Sparkle>,
}

#[function_component(Sparkles)]
pub fn sparkles(props: &SparklesProps) -> Html {
    html! {
        <>
            { for props.sparkles.iter().map(|s| html! { <div class="sparkle" style={s.style()}></div> }) }
            <style>
                {r#"
                    .sparkle {
                        position: absolute;
                        border-radius: 50%;
                        background: radial-gradient(circle, #fff8e1 0%, #d4af37 60%, transparent 100%);
                        pointer-events: none;
                        opacity: 0;
                        animation-name: twinkle;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0; transform: scale(0.4); }
                        50% { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn scatter_stays_in_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let sparkles = scatter(&mut rng, 200);
        assert_eq!(sparkles.len(), 200);
        for s in &sparkles {
            assert!((0.0..100.0).contains(&s.left_pct));
            assert!((0.0..100.0).contains(&s.top_pct));
            assert!((0.0..3.0).contains(&s.delay_s));
            assert!((2.0..5.0).contains(&s.duration_s));
            assert!((2.0..6.0).contains(&s.size_px));
        }
    }

    #[test]
    fn sparkles_are_square() {
        let s = Sparkle {
            left_pct: 10.0,
            top_pct: 20.0,
            delay_s: 1.5,
            duration_s: 3.0,
            size_px: 4.25,
        };
        let style = s.style();
        assert!(style.contains("width: 4.25px; height: 4.25px;"));
        assert!(style.starts_with("left: 10.00%; top: 20.00%;"));
    }
}
