use yew::prelude::*;
use rand::thread_rng;

use crate::anim::grid::{centered_delay, column_grid, GridSpec};
use crate::anim::shuffle::shuffled_ranks;

#[derive(Properties, PartialEq)]
pub struct CenteredPixelTransitionProps {
    pub active: bool,
    pub width: f64,
    pub height: f64,
}

/// Full-viewport pixel wipe: 20 columns of 5vw blocks, each column flipping
/// its blocks in an independent shuffled order. The overlay is purely
/// decorative and never intercepts input.
#[function_component(CenteredPixelTransition)]
pub fn centered_pixel_transition(props: &CenteredPixelTransitionProps) -> Html {
    let spec = column_grid(props.width, props.height);

    // One permutation per column, regenerated only when the grid shape
    // changes. Toggling `active` replays the same wipe pattern.
    let column_ranks = use_memo(
        |spec: &GridSpec| {
            log::debug!("centered wipe reshuffled: {} blocks", spec.block_count());
            let mut rng = thread_rng();
            (0..spec.lines)
                .map(|_| shuffled_ranks(spec.cells_per_line, &mut rng))
                .collect::<Vec<Vec<usize>>>()
        },
        spec,
    );

    let opacity = if props.active { 1 } else { 0 };

    html! {
        <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100vh; \
                    display: flex; overflow: hidden; z-index: 20; pointer-events: none;">
            { for column_ranks.iter().map(|ranks| html! {
                <div style="width: 5vw; height: 100%; display: flex; flex-direction: column;">
                    { for ranks.iter().map(|&rank| {
                        let block_style = format!(
                            "width: 100%; height: 5vw; background: #ff6a00; \
                             opacity: {opacity}; transition: opacity 0s linear {}s;",
                            centered_delay(rank),
                        );
                        html! { <div style={block_style}></div> }
                    }) }
                </div>
            }) }
        </div>
    }
}
