pub fn run(count: Option<&str>, name: &str, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::make_rng(seed);
    let reply = kb_dice::d20_request(name, count, &mut rng).map_err(|e| e.to_string())?;
    println!("{reply}");
    Ok(())
}
