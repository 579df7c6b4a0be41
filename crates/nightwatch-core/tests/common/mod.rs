use nightwatch_core::frame::Frame;

/// Frame filled with one RGBA value.
pub fn solid_frame(width: u32, height: u32, rgba: [u8; 4]) -> Frame {
    frame_from_fn(width, height, |_, _| rgba)
}

/// Frame built pixel by pixel from a closure over (x, y).
pub fn frame_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Frame {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&f(x, y));
        }
    }
    Frame::from_rgba(width, height, pixels).expect("buffer length matches dimensions")
}

/// Zero-dimension frame, used to exercise the InvalidFrame precondition.
pub fn empty_frame() -> Frame {
    Frame::from_rgba(0, 0, Vec::new()).expect("empty buffer matches 0x0")
}
