use crate::{CaError, Result, Trajectory};
use image::{GrayImage, Luma};
use std::path::Path;

const ALIVE: Luma<u8> = Luma([0]);
const DEAD: Luma<u8> = Luma([255]);

/// Draws one pixel row per generation, alive cells black, each cell a
/// `scale x scale` square.
pub fn to_image(trajectory: &Trajectory, scale: u32) -> Result<GrayImage> {
    if scale == 0 {
        return Err(CaError::InvalidScale);
    }
    let (width, height) = (trajectory.width() as u32, trajectory.len() as u32);
    let mut img = GrayImage::from_pixel(width * scale, height * scale, DEAD);
    for (y, row) in trajectory.rows().iter().enumerate() {
        for (x, state) in row.iter().enumerate() {
            if !state {
                continue;
            }
            let (x0, y0) = (x as u32 * scale, y as u32 * scale);
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, ALIVE);
                }
            }
        }
    }
    Ok(img)
}

/// Renders the trajectory and writes it as PNG, creating missing directories.
pub fn save_png(trajectory: &Trajectory, scale: u32, path: &Path) -> Result<()> {
    let img = to_image(trajectory, scale)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Row, Simulator, Transition};

    fn trajectory() -> Trajectory {
        let sim = Simulator::new(Transition::from_indices(90, None).unwrap(), 9).unwrap();
        sim.run(&Row::centered(9), 3).unwrap()
    }

    #[test]
    fn test_dimensions_and_colors() {
        let t = trajectory();
        let img = to_image(&t, 3).unwrap();
        assert_eq!(img.dimensions(), (27, 12));
        for (y, row) in t.rows().iter().enumerate() {
            for (x, state) in row.iter().enumerate() {
                let expected = if state { ALIVE } else { DEAD };
                for d in 0..3 {
                    assert_eq!(*img.get_pixel(x as u32 * 3 + d, y as u32 * 3 + 2 - d), expected);
                }
            }
        }
    }

    #[test]
    fn test_zero_scale() {
        assert!(matches!(to_image(&trajectory(), 0), Err(CaError::InvalidScale)));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/Rule 90.png");
        save_png(&trajectory(), 2, &path).unwrap();
        let img = image::open(&path).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (18, 8));
        assert_eq!(*img.get_pixel(8, 0), ALIVE);
        assert_eq!(*img.get_pixel(0, 0), DEAD);
    }
}
