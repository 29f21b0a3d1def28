//! 3×3 convolution blur over an integer image.

/// Gaussian-like blur kernel.
pub const KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];
/// Sum of [`KERNEL`]; each output pixel is divided by it.
pub const KERNEL_WEIGHT: u32 = 16;
/// Intensity of every pixel in the synthetic input image.
pub const INPUT_LEVEL: u32 = 128;

/// Row-major grid of pixel intensities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, value: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, value: u32) {
        self.cells[y * self.width + x] = value;
    }

    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }
}

/// Apply [`KERNEL`] to every interior pixel of `input`.
///
/// The one-pixel border of the output stays zero. Grids with fewer than three
/// rows or columns have no interior and come back all zero.
pub fn convolve3x3(input: &Grid) -> Grid {
    let (w, h) = (input.width, input.height);
    let mut out = Grid::filled(w, h, 0);
    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let mut acc = 0u64;
            for (ky, row) in KERNEL.iter().enumerate() {
                for (kx, &weight) in row.iter().enumerate() {
                    acc += u64::from(input.get(x + kx - 1, y + ky - 1)) * u64::from(weight);
                }
            }
            // A weighted mean never exceeds the largest input pixel.
            out.set(x, y, (acc / u64::from(KERNEL_WEIGHT)) as u32);
        }
    }
    out
}

/// Blur a constant `width × height` image and return the sum of the output.
pub fn blur(width: usize, height: usize) -> u64 {
    let img = Grid::filled(width, height, INPUT_LEVEL);
    convolve3x3(&img).sum()
}
