/// Largest integer scale at which a `render_w` x `render_h` target still fits
/// inside the window. Never below 1, even when the window is smaller than the target.
pub fn compute_upscale(render_w: u32, render_h: u32, window_w: u32, window_h: u32) -> u32 {
    if render_w == 0 || render_h == 0 {
        return 1;
    }
    (window_w / render_w).min(window_h / render_h).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple() {
        assert_eq!(compute_upscale(320, 180, 1280, 720), 4);
    }

    #[test]
    fn limited_by_tighter_axis() {
        assert_eq!(compute_upscale(320, 180, 1920, 400), 2);
        assert_eq!(compute_upscale(320, 180, 700, 1080), 2);
    }

    #[test]
    fn rounds_down() {
        assert_eq!(compute_upscale(320, 180, 959, 539), 2);
    }

    #[test]
    fn window_smaller_than_target_clamps_to_one() {
        assert_eq!(compute_upscale(320, 180, 100, 100), 1);
        assert_eq!(compute_upscale(320, 180, 0, 0), 1);
    }

    #[test]
    fn degenerate_target() {
        assert_eq!(compute_upscale(0, 180, 1280, 720), 1);
    }
}
