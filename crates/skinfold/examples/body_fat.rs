//! Jackson-Pollock 3-Site Body Fat Examples
//!
//! This example demonstrates the ways a front-end can drive the calculator:
//! - One reading per site with the free function
//! - Three replicate readings per site with the builder
//! - Raw form text, including how rejected input is reported
//! - Male and female coefficient sets side by side
//!
//! Each scenario includes the expected output as comments.
//!
//! Pass nine readings after sex and age to run your own numbers:
//!
//! ```text
//! cargo run --example body_fat -- female 31 9 10 11 12 12 12 13 14 15
//! ```

#[cfg(feature = "std")]
use skinfold::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), InvalidInput> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return run_from_args(&args);
    }

    println!("{}", "=".repeat(60));
    println!("Jackson-Pollock 3-Site Body Fat - Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_single_readings()?;
    example_2_averaged_readings()?;
    example_3_raw_form()?;
    example_4_sexes();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: One Reading Per Site
fn example_1_single_readings() -> Result<(), InvalidInput> {
    println!("Example 1: One Reading Per Site");
    println!("{}", "-".repeat(60));

    let result = calculate(Subject::male(25.0), [10.0, 12.0, 14.0])?;
    println!("{}", result);

    /* Expected Output:
    Body Density: 1.0753 g/cc
    Body Fat Percentage: 10.35%
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Three Readings Per Site
fn example_2_averaged_readings() -> Result<(), InvalidInput> {
    println!("Example 2: Three Readings Per Site");
    println!("{}", "-".repeat(60));

    let model = BodyComposition::new().sex(Male).age(30.0).build()?;
    let result = model.calculate_replicates(&[
        [9.0, 10.0, 11.0],
        [11.5, 12.0, 12.5],
        [14.0, 14.0, 14.0],
    ])?;
    println!("Skinfold sum: {:.1} mm", result.site_sum);
    println!("{}", result);

    /* Expected Output:
    Skinfold sum: 36.0 mm
    Body Density: 1.0740 g/cc
    Body Fat Percentage: 10.91%
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Raw Form Text
fn example_3_raw_form() -> Result<(), InvalidInput> {
    println!("Example 3: Raw Form Text");
    println!("{}", "-".repeat(60));

    let form = RawInput::new("female", "25", &[&["10"], &["12"], &["14"]]);
    println!("{}", form.evaluate::<f64>()?);

    let typo = RawInput::new("female", "25", &[&["10"], &["1 2"], &["14"]]);
    match typo.evaluate::<f64>() {
        Ok(result) => println!("{}", result),
        Err(e) => {
            println!("Alert:  {}", e.user_message());
            println!("Detail: {}", e);
        }
    }

    /* Expected Output:
    Body Density: 1.0632 g/cc
    Body Fat Percentage: 15.59%
    Alert:  Please enter valid numeric values for all fields.
    Detail: Invalid input: site 2 reading 1 is not a number: "1 2"
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Coefficient Sets
fn example_4_sexes() {
    println!("Example 4: Coefficient Sets");
    println!("{}", "-".repeat(60));
    println!("{:>8} {:>10} {:>10}", "Sex", "Density", "Body fat");

    for sex in [Male, Female] {
        match calculate(Subject::new(sex, 40.0), [15.0, 20.0, 25.0]) {
            Ok(r) => println!(
                "{:>8} {:>10} {:>9}%",
                sex.as_str(),
                r.density_text(),
                r.body_fat_text()
            ),
            Err(e) => println!("{:>8} {}", sex.as_str(), e),
        }
    }

    /* Expected Output:
         Sex    Density   Body fat
        male     1.0552     19.09%
      female     1.0426     24.79%
    */

    println!();
}

#[cfg(feature = "std")]
/// Sex, age and nine readings (three per site) from the command line.
fn run_from_args(args: &[String]) -> Result<(), InvalidInput> {
    let readings: Vec<&str> = args.iter().skip(2).map(String::as_str).collect();
    let sites: Vec<&[&str]> = readings.chunks(3).collect();
    let sex = args.first().map_or("", String::as_str);
    let age = args.get(1).map_or("", String::as_str);

    match RawInput::new(sex, age, &sites).evaluate::<f64>() {
        Ok(result) => {
            println!("{}", result);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Err(e)
        }
    }
}
