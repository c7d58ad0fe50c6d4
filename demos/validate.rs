use vincheck::{check_digit, validate, year_from_vin};

fn main() {
    let records = [
        ("WDDUG8CB9FA092680", Some(2015)),
        ("1G5EC13D5B7100001", Some(1981)),
        ("9111121907", Some(1977)),
        ("ZACCJABT0FPB66932", Some(2014)),
        ("3FA6P0PU0ER395281", Some(2014)),
        ("SU", Some(2014)),
    ];

    for (vin, year) in records {
        let report = validate(Some(vin), year);
        if report.is_valid() {
            println!("{vin}: valid");
        } else {
            println!("{vin}: invalid");
            for message in report.messages() {
                println!("  {message}");
            }
        }
    }

    // The building blocks are available on their own.
    let vin = "WDDUG8CB9FA092680";
    println!("\ncheck digit of {vin}: {:?}", check_digit(vin));
    println!("model year of {vin}: {}", year_from_vin(vin, None));
}
