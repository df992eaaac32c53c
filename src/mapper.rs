/// Drawable size of the surface and the border kept free on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl SurfaceGeometry {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.max(0.) as u32, self.height.max(0.) as u32)
    }
}

/// Maps normalized data values onto surface pixels.
///
/// Points, the fit line and the regression step all go through the same
/// mapper so that the line stays aligned with the plotted data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    geometry: SurfaceGeometry,
    amplification: f64,
}

impl CoordinateMapper {
    pub fn new(geometry: SurfaceGeometry, amplification: f64) -> Self {
        Self {
            geometry,
            amplification,
        }
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = geometry;
    }

    pub fn amplification(&self) -> f64 {
        self.amplification
    }

    /// Normalized value to scaled space along an axis of length `extent`.
    pub fn scale(&self, value: f64, extent: f64) -> f64 {
        value * (extent - 2. * self.geometry.margin) * self.amplification
    }

    pub fn scale_x(&self, value: f64) -> f64 {
        self.scale(value, self.geometry.width)
    }

    pub fn scale_y(&self, value: f64) -> f64 {
        self.scale(value, self.geometry.height)
    }

    pub fn to_surface_x(&self, x: f64) -> f64 {
        self.geometry.margin + self.scale_x(x)
    }

    /// Pixel rows grow downwards, so larger values land higher on the surface.
    pub fn to_surface_y(&self, y: f64) -> f64 {
        self.scaled_to_surface_y(self.scale_y(y))
    }

    pub fn scaled_to_surface_y(&self, scaled: f64) -> f64 {
        self.geometry.height - self.geometry.margin - scaled
    }

    pub fn from_surface_x(&self, px: f64) -> f64 {
        (px - self.geometry.margin) / self.unit(self.geometry.width)
    }

    pub fn from_surface_y(&self, py: f64) -> f64 {
        (self.geometry.height - self.geometry.margin - py) / self.unit(self.geometry.height)
    }

    fn unit(&self, extent: f64) -> f64 {
        (extent - 2. * self.geometry.margin) * self.amplification
    }
}
