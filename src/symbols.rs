use std::collections::HashMap;

/// Variable values for one session. Names are created on first reference and never removed.
#[derive(Debug, Clone)]
pub struct SymbolTable
{
	values: HashMap<String, f64>,
}

impl SymbolTable
{
	pub fn new() -> SymbolTable
	{
		let mut values = HashMap::new();
		values.insert("pi".to_string(), std::f64::consts::PI);
		values.insert("e".to_string(), std::f64::consts::E);
		SymbolTable { values }
	}

	/// Mutable slot for `name`, inserting `0.0` first when the name is unknown.
	pub fn lookup(&mut self, name: &str) -> &mut f64
	{
		if !self.values.contains_key(name)
		{
			log::debug!("new variable {}", name);
		}
		self.values.entry(name.to_string()).or_insert(0.0)
	}

	pub fn get(&self, name: &str) -> Option<f64>
	{
		self.values.get(name).copied()
	}
}

impl Default for SymbolTable
{
	fn default() -> Self
	{
		SymbolTable::new()
	}
}
