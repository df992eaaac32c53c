use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::mapper::SurfaceGeometry;
use crate::surface::{Frame, Segment};

const TICK_COUNT: u32 = 15;
const TICK_WIDTH: f64 = 2.;
const TICK_LENGTH: f64 = 15.;
const AXIS_WIDTH: u32 = 2;
const LINE_WIDTH: u32 = 2;
const LABEL_FONT_SIZE: u32 = 18;

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn px(v: f64) -> i32 {
    v.round() as i32
}

/// Background, chrome, data points and fit line, in that order.
pub fn draw_frame<DB>(frame: &Frame, drawing_area: &DrawingArea<DB, Shift>) -> DrawResult<DB>
where
    DB: DrawingBackend,
{
    draw_background(drawing_area)?;
    draw_axes(&frame.geometry, drawing_area)?;
    draw_ticks(&frame.geometry, drawing_area)?;
    draw_axis_labels(&frame.geometry, &frame.x_label, &frame.y_label, drawing_area)?;

    if let Some(points) = &frame.points {
        draw_points(points, frame.point_radius, drawing_area)?;
    }

    if let Some(line) = &frame.line {
        draw_line(line, drawing_area)?;
    }

    Ok(())
}

pub fn draw_background<DB: DrawingBackend>(drawing_area: &DrawingArea<DB, Shift>) -> DrawResult<DB> {
    drawing_area.fill(&BLACK)
}

pub fn draw_axes<DB>(geometry: &SurfaceGeometry, drawing_area: &DrawingArea<DB, Shift>) -> DrawResult<DB>
where
    DB: DrawingBackend,
{
    let SurfaceGeometry {
        width,
        height,
        margin,
    } = *geometry;

    let origin = (px(margin), px(height - margin));
    let style = WHITE.stroke_width(AXIS_WIDTH);

    drawing_area.draw(&PathElement::new(
        vec![origin, (px(width - margin), px(height - margin))],
        style,
    ))?;
    drawing_area.draw(&PathElement::new(vec![origin, (px(margin), px(margin))], style))?;

    Ok(())
}

/// Evenly spaced ticks across the whole surface, centred on each axis.
pub fn draw_ticks<DB>(geometry: &SurfaceGeometry, drawing_area: &DrawingArea<DB, Shift>) -> DrawResult<DB>
where
    DB: DrawingBackend,
{
    let SurfaceGeometry {
        width,
        height,
        margin,
    } = *geometry;

    let step_x = width / TICK_COUNT as f64;
    let step_y = height / TICK_COUNT as f64;
    let style = WHITE.filled();

    for i in 1..TICK_COUNT {
        let x = i as f64 * step_x;
        let y = i as f64 * step_y;

        let x_tick_top = height - margin - TICK_LENGTH / 2.;
        drawing_area.draw(&Rectangle::new(
            [
                (px(x - TICK_WIDTH / 2.), px(x_tick_top)),
                (px(x + TICK_WIDTH / 2.), px(x_tick_top + TICK_LENGTH)),
            ],
            style,
        ))?;

        let y_tick_left = margin - TICK_LENGTH / 2.;
        drawing_area.draw(&Rectangle::new(
            [
                (px(y_tick_left), px(y - TICK_WIDTH / 2.)),
                (px(y_tick_left + TICK_LENGTH), px(y + TICK_WIDTH / 2.)),
            ],
            style,
        ))?;
    }

    Ok(())
}

pub fn draw_axis_labels<DB>(
    geometry: &SurfaceGeometry,
    x_label: &str,
    y_label: &str,
    drawing_area: &DrawingArea<DB, Shift>,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
{
    let SurfaceGeometry {
        width,
        height,
        margin,
    } = *geometry;

    let centered = Pos::new(HPos::Center, VPos::Center);
    let font = ("sans-serif", LABEL_FONT_SIZE).into_font();

    drawing_area.draw(&Text::new(
        x_label.to_owned(),
        (px(width / 2.), px(height - margin / 2.)),
        font.clone().color(&RED).pos(centered),
    ))?;

    drawing_area.draw(&Text::new(
        y_label.to_owned(),
        (px(margin / 2.), px(height / 2.)),
        font.transform(FontTransform::Rotate270)
            .color(&RED)
            .pos(centered),
    ))?;

    Ok(())
}

pub fn draw_points<DB>(
    points: &[(f64, f64)],
    radius: u32,
    drawing_area: &DrawingArea<DB, Shift>,
) -> DrawResult<DB>
where
    DB: DrawingBackend,
{
    for &(x, y) in points {
        drawing_area.draw(&Circle::new((px(x), px(y)), radius, YELLOW.filled()))?;
    }

    Ok(())
}

pub fn draw_line<DB>(line: &Segment, drawing_area: &DrawingArea<DB, Shift>) -> DrawResult<DB>
where
    DB: DrawingBackend,
{
    let Segment { from, to } = *line;

    drawing_area.draw(&PathElement::new(
        vec![(px(from.0), px(from.1)), (px(to.0), px(to.1))],
        CYAN.stroke_width(LINE_WIDTH),
    ))
}
