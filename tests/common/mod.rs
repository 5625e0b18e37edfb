use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_roster_csv(path: &Path, technicians: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "date_joined",
        "is_active",
    ])?;

    for i in 1..=technicians {
        wtr.write_record([
            i.to_string(),
            "Tech".to_string(),
            format!("Number{i}"),
            format!("tech{i}@fieldpay.test"),
            String::new(),
            format!("2023-01-{:02}T12:00:00Z", (i % 28) + 1),
            "true".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn generate_orders_csv(path: &Path, rows: usize, technicians: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["id", "technician", "hours", "created_at"])?;

    for i in 1..=rows {
        let technician: usize = rng.gen_range(1..=technicians);
        let hours: u32 = rng.gen_range(1..=10);
        wtr.write_record([
            i.to_string(),
            technician.to_string(),
            hours.to_string(),
            String::new(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
