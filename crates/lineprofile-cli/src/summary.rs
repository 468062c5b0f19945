use console::Style;
use lineprofile_core::calibration::CalibrationState;
use lineprofile_core::profile::{Orientation, Profile};
use lineprofile_core::region::Region;
use std::path::Path;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_profile_summary(
    input: &Path,
    calibration: &CalibrationState,
    orientation: Orientation,
    region: &Region,
    profile: &Profile,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Line Profile"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!();

    // Calibration
    println!("  {}", s.header.apply_to("Calibration"));
    if calibration.custom_enabled {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Pixel size"),
            s.value.apply_to(format!("{} um (custom)", calibration.custom_pixel_size))
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Camera"),
            s.method.apply_to(calibration.camera)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Objective"),
            s.value.apply_to(format!("{}x", calibration.magnification))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Factor"),
        s.value.apply_to(format!("{} um/px", calibration.scaling_factor()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Display"),
        s.method.apply_to(calibration.display_mode())
    );
    if calibration.grayscale {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Color"),
            s.disabled.apply_to("grayscale")
        );
    }
    println!();

    // Region
    println!("  {}", s.header.apply_to("Region"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scan"),
        s.method.apply_to(orientation)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Origin"),
        s.value.apply_to(format!("row {}, col {}", region.row, region.col))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{} x {}", region.height, region.width))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Samples"),
        s.value.apply_to(profile.len())
    );
    println!();
}
