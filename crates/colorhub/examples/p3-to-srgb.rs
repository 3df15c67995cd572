use colorhub::named::closest_named_color;
use colorhub::{convert, map_gamut, to_24bit, ColorSpace, GamutMapping};

fn main() {
    let primaries = [
        ("red", [1.0, 0.0, 0.0]),
        ("green", [0.0, 1.0, 0.0]),
        ("blue", [0.0, 0.0, 1.0]),
        ("yellow", [1.0, 1.0, 0.0]),
    ];

    println!("Display P3 colors mapped into sRGB:\n");
    for (label, p3) in primaries {
        let srgb = convert(ColorSpace::DisplayP3, ColorSpace::Srgb, &p3);

        for method in [GamutMapping::Bisection, GamutMapping::RayTrace] {
            let mapped = map_gamut(ColorSpace::Srgb, &srgb, method);
            let [r, g, b] = to_24bit(ColorSpace::Srgb, &mapped);

            println!(
                "    {:<6} {:<10} #{:02x}{:02x}{:02x}  closest to {}",
                label,
                format!("{:?}", method),
                r,
                g,
                b,
                closest_named_color(&mapped).unwrap_or("nothing"),
            );
        }
    }
}
