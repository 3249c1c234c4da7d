use colored::Colorize;
use livefield::registration::RULES;

pub fn execute() {
    println!("{}", "Validation rules:".bold());
    for (field, rule) in RULES {
        println!("  {} {}", format!("{}:", field).yellow().bold(), rule);
    }
    println!("  {}", "No field is ever marked valid by mistake".red().bold());
}
