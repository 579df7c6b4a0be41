use ndarray::Array2;

/// A connected region of edge pixels.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Number of pixels in the region.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col), inclusive.
    pub bbox: (usize, usize, usize, usize),
}

impl Contour {
    pub fn bbox_width(&self) -> usize {
        self.bbox.3 - self.bbox.2 + 1
    }

    pub fn bbox_height(&self) -> usize {
        self.bbox.1 - self.bbox.0 + 1
    }

    /// Bounding-box aspect ratio, width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.bbox_width() as f64 / self.bbox_height() as f64
    }
}

/// Extract connected regions from a binary edge mask using stack-based flood
/// fill with 8-connectivity.
///
/// Returns contours sorted by area descending.
pub fn find_contours(mask: &Array2<bool>) -> Vec<Contour> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut visited = Array2::<bool>::from_elem((h, w), false);
    let mut contours = Vec::new();
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] || visited[[row, col]] {
                continue;
            }

            let mut contour = Contour {
                area: 0,
                bbox: (row, row, col, col),
            };

            visited[[row, col]] = true;
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                contour.area += 1;
                contour.bbox.0 = contour.bbox.0.min(r);
                contour.bbox.1 = contour.bbox.1.max(r);
                contour.bbox.2 = contour.bbox.2.min(c);
                contour.bbox.3 = contour.bbox.3.max(c);

                for dr in -1i64..=1 {
                    for dc in -1i64..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        let nr = r as i64 + dr;
                        let nc = c as i64 + dc;
                        if nr < 0 || nc < 0 || nr >= h as i64 || nc >= w as i64 {
                            continue;
                        }
                        let (nr, nc) = (nr as usize, nc as usize);
                        if mask[[nr, nc]] && !visited[[nr, nc]] {
                            visited[[nr, nc]] = true;
                            stack.push((nr, nc));
                        }
                    }
                }
            }

            contours.push(contour);
        }
    }

    contours.sort_unstable_by(|a, b| b.area.cmp(&a.area));
    contours
}
