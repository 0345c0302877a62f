use clap::Parser;
use rental_finder::engine::FilterInput;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rental-finder")]
#[command(about = "Search rental listings with the same filters as the app", long_about = None)]
pub struct Cli {
    /// Read properties from a JSON file instead of the API
    #[arg(long, conflicts_with = "landlord")]
    pub file: Option<PathBuf>,

    /// Only list properties owned by this landlord
    #[arg(long)]
    pub landlord: Option<i64>,

    /// Override RENTAL_API_URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// City, municipality or title contains this text
    #[arg(long)]
    pub city: Option<String>,

    /// Listing status ("All" for any)
    #[arg(long)]
    pub status: Option<String>,

    /// Room type ("All" for any)
    #[arg(long)]
    pub room_type: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    /// At least this many bedrooms
    #[arg(long)]
    pub bedrooms: Option<String>,

    /// At least this many bathrooms
    #[arg(long)]
    pub bathrooms: Option<String>,

    /// At least this many kitchens
    #[arg(long)]
    pub kitchens: Option<String>,

    /// Only show these property ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub favourites: Option<Vec<i64>>,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Override RENTAL_PAGE_SIZE
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Save the loaded properties to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

impl Cli {
    pub fn filter_input(&self) -> FilterInput {
        FilterInput {
            city: self.city.clone(),
            status: self.status.clone(),
            room_type: self.room_type.clone(),
            min_price: self.min_price.clone(),
            max_price: self.max_price.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            kitchens: self.kitchens.clone(),
        }
    }
}
