use std::collections::HashMap;
use std::env;

/// A typed command line argument registry. Arguments are declared up front
/// with a category, a description, a default and the permitted range or
/// value set, then parsed from `-name=value` tokens. Unknown names, missing
/// `=` signs and out-of-range values abort immediately; these are usage
/// errors, not data errors.
pub struct ArgumentHandler {
    categories: HashMap<String, Category>,
    arguments_integer: HashMap<String, IntegerEntry>,
    arguments_string: HashMap<String, StringEntry>,
    arguments_float: HashMap<String, FloatEntry>,
    arguments_bool: HashMap<String, BoolEntry>,
}

impl ArgumentHandler {
    pub fn new() -> ArgumentHandler {
        ArgumentHandler {
            categories: HashMap::new(),
            arguments_integer: HashMap::new(),
            arguments_string: HashMap::new(),
            arguments_float: HashMap::new(),
            arguments_bool: HashMap::new(),
        }
    }

    pub fn print_help_summary_if_needed_and_exit(&self) {
        if !env::args().skip(1).any(|arg| arg.starts_with("-help")) {
            return;
        }

        println!("c ----------------------");
        println!("c Displaying argument help information.");
        for entry in &self.categories {
            println!("c ----------------------");
            println!("c Category: {}. {}", *entry.0, (*entry.1).short_description);
            for argument in &(*entry.1).arguments {
                match argument.data_type {
                    DataType::Integer => {
                        let argument_info = self.arguments_integer.get(&argument.name).unwrap();
                        println!(
                            "c \t-{}. Integer. {}",
                            argument.name, argument_info.short_description
                        );
                        println!("c \t\tDefault: {}", argument_info.default_value);
                        println!(
                            "c \t\tRange = [{}, {}]",
                            argument_info.min_value, argument_info.max_value
                        );
                    }
                    DataType::Float => {
                        let argument_info = self.arguments_float.get(&argument.name).unwrap();
                        println!(
                            "c \t-{}. Float. {}",
                            argument.name, argument_info.short_description
                        );
                        println!("c \t\tDefault: {}", argument_info.default_value);
                        println!(
                            "c \t\tRange = [{}, {}]",
                            argument_info.min_value, argument_info.max_value
                        );
                    }
                    DataType::String => {
                        let argument_info = self.arguments_string.get(&argument.name).unwrap();
                        println!(
                            "c \t-{}. String. {}",
                            argument.name, argument_info.short_description
                        );
                        println!("c \t\tDefault: {}", argument_info.default_value);
                        if argument_info.allowed_values.is_empty() {
                            println!("c \t\tAllowed values = [any string, no restrictions]");
                        } else {
                            println!(
                                "c \t\tAllowed values = {{{}}}",
                                argument_info.allowed_values.join(", ")
                            );
                        }
                    }
                    DataType::Bool => {
                        let argument_info = self.arguments_bool.get(&argument.name).unwrap();
                        println!(
                            "c \t-{}. Bool. {}",
                            argument.name, argument_info.short_description
                        );
                        println!("c \t\tDefault: {}", argument_info.default_value);
                    }
                }
            }
        }
        println!("c ----------------------");
        std::process::exit(0);
    }

    pub fn print_arguments_different_from_default(&self) {
        let mut at_least_one_argument_is_different = false;
        for entry in &self.categories {
            for argument in &(*entry.1).arguments {
                match argument.data_type {
                    DataType::Integer => {
                        let argument_info = self.arguments_integer.get(&argument.name).unwrap();
                        if argument_info.current_value != argument_info.default_value {
                            at_least_one_argument_is_different = true;
                            println!(
                                "c \t-{}={} (default: {})",
                                argument.name,
                                argument_info.current_value,
                                argument_info.default_value
                            );
                        }
                    }
                    DataType::Float => {
                        let argument_info = self.arguments_float.get(&argument.name).unwrap();
                        if argument_info.current_value != argument_info.default_value {
                            at_least_one_argument_is_different = true;
                            println!(
                                "c \t-{}={} (default: {})",
                                argument.name,
                                argument_info.current_value,
                                argument_info.default_value
                            );
                        }
                    }
                    DataType::String => {
                        let argument_info = self.arguments_string.get(&argument.name).unwrap();
                        if argument_info.current_value != argument_info.default_value {
                            at_least_one_argument_is_different = true;
                            println!(
                                "c \t-{}={} (default: {})",
                                argument.name,
                                argument_info.current_value,
                                argument_info.default_value
                            );
                        }
                    }
                    DataType::Bool => {
                        let argument_info = self.arguments_bool.get(&argument.name).unwrap();
                        if argument_info.current_value != argument_info.default_value {
                            at_least_one_argument_is_different = true;
                            println!(
                                "c \t-{}={} (default: {})",
                                argument.name,
                                argument_info.current_value,
                                argument_info.default_value
                            );
                        }
                    }
                }
            }
        }

        if at_least_one_argument_is_different {
            println!("c The arguments above differ from their default values.");
        }
    }

    pub fn parse_command_line_arguments(&mut self) {
        //the first argument is the executable path, skip it
        for argument in env::args().skip(1) {
            assert!(!argument.is_empty(), "Found empty command line argument.");
            assert!(
                argument.starts_with('-'),
                "Each command line argument is expected to start with '-'."
            );
            let equals_position = argument
                .find('=')
                .expect("Found command line argument without '='");

            let argument_name = &argument[1..equals_position];
            let raw_argument_value = &argument[equals_position + 1..];
            let argument_type = self
                .get_argument_type(argument_name)
                .unwrap_or_else(|| panic!("Unknown argument: {argument_name}"));

            match argument_type {
                DataType::Integer => {
                    let value = raw_argument_value.parse::<i64>().unwrap_or_else(|_| {
                        panic!(
                            "Cannot convert argument value '{raw_argument_value}' into an integer."
                        )
                    });
                    self.set_integer_argument(argument_name, value);
                }
                DataType::Float => {
                    let value = raw_argument_value.parse::<f64>().unwrap_or_else(|_| {
                        panic!(
                            "Cannot convert argument value '{raw_argument_value}' into a float."
                        )
                    });
                    self.set_float_argument(argument_name, value);
                }
                DataType::String => {
                    self.set_string_argument(argument_name, raw_argument_value);
                }
                DataType::Bool => {
                    let value = raw_argument_value.parse::<bool>().unwrap_or_else(|_| {
                        panic!(
                            "Cannot convert argument value '{raw_argument_value}' into a bool. Remember to use 'true' and 'false' for bools rather than numeric values."
                        )
                    });
                    self.set_bool_argument(argument_name, value);
                }
            }
        }
    }

    pub fn get_integer_argument(&self, name: &str) -> i64 {
        self.arguments_integer
            .get(name)
            .unwrap_or_else(|| panic!("Unknown integer argument: {name}"))
            .current_value
    }

    pub fn get_float_argument(&self, name: &str) -> f64 {
        self.arguments_float
            .get(name)
            .unwrap_or_else(|| panic!("Unknown float argument: {name}"))
            .current_value
    }

    pub fn get_string_argument(&self, name: &str) -> String {
        self.arguments_string
            .get(name)
            .unwrap_or_else(|| panic!("Unknown string argument: {name}"))
            .current_value
            .clone()
    }

    pub fn get_bool_argument(&self, name: &str) -> bool {
        self.arguments_bool
            .get(name)
            .unwrap_or_else(|| panic!("Unknown bool argument: {name}"))
            .current_value
    }

    pub fn set_integer_argument(&mut self, argument_name: &str, value: i64) {
        let entry = self
            .arguments_integer
            .get_mut(argument_name)
            .unwrap_or_else(|| panic!("Unknown integer argument: {argument_name}"));
        assert!(
            entry.min_value <= value && value <= entry.max_value,
            "The value '{value}' supplied for argument '{argument_name}' is not within the allowed range [{}, {}]",
            entry.min_value,
            entry.max_value
        );
        entry.current_value = value;
    }

    pub fn set_float_argument(&mut self, argument_name: &str, value: f64) {
        let entry = self
            .arguments_float
            .get_mut(argument_name)
            .unwrap_or_else(|| panic!("Unknown float argument: {argument_name}"));
        assert!(
            entry.min_value <= value && value <= entry.max_value,
            "The value '{value}' supplied for argument '{argument_name}' is not within the allowed range [{}, {}]",
            entry.min_value,
            entry.max_value
        );
        entry.current_value = value;
    }

    pub fn set_string_argument(&mut self, argument_name: &str, value: &str) {
        let entry = self
            .arguments_string
            .get_mut(argument_name)
            .unwrap_or_else(|| panic!("Unknown string argument: {argument_name}"));
        assert!(
            entry.allowed_values.is_empty() || entry.allowed_values.iter().any(|s| *s == value),
            "The value '{value}' supplied for argument '{argument_name}' is not within the allowed values ({{{}}}).",
            entry.allowed_values.join(", ")
        );
        entry.current_value = value.to_string();
    }

    pub fn set_bool_argument(&mut self, argument_name: &str, value: bool) {
        self.arguments_bool
            .get_mut(argument_name)
            .unwrap_or_else(|| panic!("Unknown bool argument: {argument_name}"))
            .current_value = value;
    }

    pub fn define_new_category(&mut self, category_name: &str, short_description: &str) {
        assert!(!category_name.is_empty() && !short_description.is_empty());
        assert!(
            !self.categories.contains_key(category_name),
            "Category '{category_name}' already exists, cannot create it twice."
        );
        self.categories.insert(
            category_name.to_string(),
            Category {
                short_description: short_description.to_string(),
                arguments: vec![],
            },
        );
    }

    pub fn define_integer_argument(
        &mut self,
        argument_name: &str,
        category_name: &str,
        short_description: &str,
        default_value: i64,
        min_value: i64,
        max_value: i64,
    ) {
        self.register_argument(argument_name, category_name, DataType::Integer);
        self.arguments_integer.insert(
            argument_name.to_string(),
            IntegerEntry {
                short_description: short_description.to_string(),
                default_value,
                current_value: default_value,
                min_value,
                max_value,
            },
        );
    }

    pub fn define_float_argument(
        &mut self,
        argument_name: &str,
        category_name: &str,
        short_description: &str,
        default_value: f64,
        min_value: f64,
        max_value: f64,
    ) {
        self.register_argument(argument_name, category_name, DataType::Float);
        self.arguments_float.insert(
            argument_name.to_string(),
            FloatEntry {
                short_description: short_description.to_string(),
                default_value,
                current_value: default_value,
                min_value,
                max_value,
            },
        );
    }

    pub fn define_string_argument(
        &mut self,
        argument_name: &str,
        category_name: &str,
        short_description: &str,
        default_value: &str,
        allowed_values: &[&str],
    ) {
        self.register_argument(argument_name, category_name, DataType::String);
        self.arguments_string.insert(
            argument_name.to_string(),
            StringEntry {
                short_description: short_description.to_string(),
                default_value: default_value.to_string(),
                current_value: default_value.to_string(),
                allowed_values: allowed_values.iter().map(|s| s.to_string()).collect(),
            },
        );
    }

    pub fn define_bool_argument(
        &mut self,
        argument_name: &str,
        category_name: &str,
        short_description: &str,
        default_value: bool,
    ) {
        self.register_argument(argument_name, category_name, DataType::Bool);
        self.arguments_bool.insert(
            argument_name.to_string(),
            BoolEntry {
                short_description: short_description.to_string(),
                default_value,
                current_value: default_value,
            },
        );
    }

    fn register_argument(
        &mut self,
        argument_name: &str,
        category_name: &str,
        data_type: DataType,
    ) {
        assert!(!argument_name.is_empty());
        assert!(
            self.get_argument_type(argument_name).is_none(),
            "Argument '{argument_name}' is already defined."
        );
        self.categories
            .get_mut(category_name)
            .unwrap_or_else(|| panic!("Unknown category '{category_name}'"))
            .arguments
            .push(PairNameType {
                name: argument_name.to_string(),
                data_type,
            });
    }

    fn get_argument_type(&self, name: &str) -> Option<DataType> {
        if self.arguments_integer.contains_key(name) {
            Some(DataType::Integer)
        } else if self.arguments_bool.contains_key(name) {
            Some(DataType::Bool)
        } else if self.arguments_float.contains_key(name) {
            Some(DataType::Float)
        } else if self.arguments_string.contains_key(name) {
            Some(DataType::String)
        } else {
            None
        }
    }
}

impl Default for ArgumentHandler {
    fn default() -> Self {
        ArgumentHandler::new()
    }
}

#[derive(Copy, Clone)]
enum DataType {
    Integer,
    Float,
    String,
    Bool,
}

struct Category {
    short_description: String,
    arguments: Vec<PairNameType>,
}

struct PairNameType {
    name: String,
    data_type: DataType,
}

struct IntegerEntry {
    short_description: String,
    default_value: i64,
    current_value: i64,
    min_value: i64,
    max_value: i64,
}

struct FloatEntry {
    short_description: String,
    default_value: f64,
    current_value: f64,
    min_value: f64,
    max_value: f64,
}

struct StringEntry {
    short_description: String,
    default_value: String,
    current_value: String,
    allowed_values: Vec<String>,
}

struct BoolEntry {
    short_description: String,
    default_value: bool,
    current_value: bool,
}
