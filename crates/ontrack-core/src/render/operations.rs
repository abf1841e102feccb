use crate::geometry::{ArcSpec, DeviationColor, DisplaySnapshot};
use crate::render::types::{Drawable, Palette, Point, Rgb, WidgetLayout, WidgetScene};

/// Lay out a snapshot with the default small-widget layout and palette.
pub fn render(snapshot: &DisplaySnapshot) -> WidgetScene {
    render_with_layout(snapshot, &WidgetLayout::default(), &Palette::default())
}

/// Lay out a snapshot as drawables, back to front:
/// budget ring, balance label, deviation label, spent ring, deviation ring, caption.
fn render_with_layout(
    snapshot: &DisplaySnapshot,
    layout: &WidgetLayout,
    palette: &Palette,
) -> WidgetScene {
    let deviation_color = match snapshot.deviation_color {
        DeviationColor::Positive => palette.positive,
        DeviationColor::Negative => palette.negative,
    };

    // Column: spacer, ring frame, spacer, caption; centered vertically.
    let column_height =
        layout.spacing + layout.ring_frame + layout.spacing + layout.caption_font_size;
    let top = (layout.height - column_height) / 2.0;
    let center = Point {
        x: layout.width / 2.0,
        y: top + layout.spacing + layout.ring_frame / 2.0,
    };
    let radius = layout.ring_frame / 2.0;

    // The two labels stack inside the ring, centered as a pair.
    let labels_height = layout.balance_font_size + layout.deviation_font_size;
    let labels_top = center.y - labels_height / 2.0;

    let ring = |arc: ArcSpec, color: Rgb| Drawable::Ring {
        center,
        radius,
        line_width: layout.ring_line_width,
        start_degrees: arc.start_degrees(),
        sweep_degrees: arc.sweep_degrees(),
        color,
    };

    let drawables = vec![
        ring(snapshot.budget_arc(), palette.budget),
        Drawable::Text {
            content: snapshot.total_balance_label.clone(),
            position: Point {
                x: center.x,
                y: labels_top + layout.balance_font_size / 2.0,
            },
            size: layout.balance_font_size,
            bold: true,
            color: palette.budget,
        },
        Drawable::Text {
            content: snapshot.deviation_label.clone(),
            position: Point {
                x: center.x,
                y: labels_top + layout.balance_font_size + layout.deviation_font_size / 2.0,
            },
            size: layout.deviation_font_size,
            bold: true,
            color: deviation_color,
        },
        ring(snapshot.spent_arc(), palette.spent),
        ring(snapshot.deviation_arc(), deviation_color),
        Drawable::Text {
            content: snapshot.days_left_caption(),
            position: Point {
                x: center.x,
                y: center.y + radius + layout.spacing + layout.caption_font_size / 2.0,
            },
            size: layout.caption_font_size,
            bold: false,
            color: palette.caption,
        },
    ];

    WidgetScene {
        width: layout.width,
        height: layout.height,
        drawables,
    }
}
