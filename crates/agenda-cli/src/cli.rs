//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a CLI-specific argument structure with clap derives
//! and a `From` conversion into the matching core parameter type. Core
//! parameter types stay free of clap attributes, and the conversion keeps
//! the boundary between the layers explicit and verifiable at compile time.

use anyhow::Result;
use agenda_core::{
    params::*, AppointmentCache, Appointments, BookingForm, CreateResult, DeleteResult,
    InvoiceBuilder, Invoices, OperationStatus, PaymentMethod, Products, Scheduler, TimeSlot,
    UpdateResult,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::renderer::TerminalRenderer;

/// Book a new appointment
///
/// The selected catalog product is snapshotted into the appointment, so
/// later catalog changes do not affect the booking. Choosing the transfer
/// payment method generates a reference number to show the client.
#[derive(Args)]
pub struct BookAppointmentArgs {
    /// Name of the client
    pub client_name: String,
    /// ID of the catalog product to book
    #[arg(help = "Unique identifier of the catalog product to book")]
    pub product_id: u64,
    /// Appointment date in YYYY-MM-DD form
    #[arg(short, long)]
    pub date: String,
    /// Time slot label, e.g. "8:15 a 10:00" (see `appointment slots`)
    #[arg(short, long)]
    pub slot: String,
    /// Payment method
    #[arg(short, long, value_enum)]
    pub payment_method: PaymentMethodArg,
    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Initial status; defaults to pendiente
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

/// List appointments
///
/// Lists all appointments by default. With --client, only that client's
/// bookings are shown. With --from and --to, only appointments whose date
/// falls within the inclusive range are shown; entries with unparseable
/// stored dates are omitted from date-filtered output.
#[derive(Args)]
pub struct ListAppointmentsArgs {
    /// Only show appointments for this client
    #[arg(short, long)]
    pub client: Option<String>,
    /// Range start in YYYY-MM-DD form (requires --to)
    #[arg(long, requires = "to")]
    pub from: Option<String>,
    /// Range end in YYYY-MM-DD form (requires --from)
    #[arg(long, requires = "from")]
    pub to: Option<String>,
}

/// Show details of a specific appointment
#[derive(Args)]
pub struct ShowAppointmentArgs {
    /// ID of the appointment to display
    #[arg(help = "Unique identifier of the appointment to show details for")]
    pub id: u64,
}

impl From<ShowAppointmentArgs> for Id {
    fn from(val: ShowAppointmentArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update an appointment's status or details
///
/// Only the provided fields are changed; everything else keeps its stored
/// value. Passing --product-id re-snapshots the design from the catalog.
#[derive(Args)]
pub struct UpdateAppointmentArgs {
    #[arg(help = "Unique identifier of the appointment to update")]
    pub id: u64,
    /// New status for the appointment
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    /// Updated client name
    #[arg(long)]
    pub client_name: Option<String>,
    /// Updated phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Updated date in YYYY-MM-DD form
    #[arg(short, long)]
    pub date: Option<String>,
    /// Updated time slot label
    #[arg(long)]
    pub slot: Option<String>,
    /// Updated payment method
    #[arg(short, long, value_enum)]
    pub payment_method: Option<PaymentMethodArg>,
    /// Re-snapshot the design from this catalog product
    #[arg(long)]
    pub product_id: Option<u64>,
}

impl From<UpdateAppointmentArgs> for UpdateAppointment {
    fn from(val: UpdateAppointmentArgs) -> Self {
        UpdateAppointment {
            id: val.id,
            client_name: val.client_name,
            phone: val.phone,
            date: val.date,
            slot: val.slot,
            payment_method: val.payment_method.map(|m| m.to_string()),
            status: val.status.map(|s| s.to_string()),
            product_id: val.product_id,
            payment_reference: None,
        }
    }
}

/// Delete an appointment permanently
#[derive(Args)]
pub struct DeleteAppointmentArgs {
    /// ID of the appointment to delete
    #[arg(help = "Unique identifier of the appointment to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteAppointmentArgs> for DeleteAppointment {
    fn from(val: DeleteAppointmentArgs) -> Self {
        DeleteAppointment {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum AppointmentCommands {
    /// Book a new appointment
    #[command(alias = "b")]
    Book(BookAppointmentArgs),
    /// List appointments
    #[command(aliases = ["l", "ls"])]
    List(ListAppointmentsArgs),
    /// Show details of a specific appointment
    #[command(alias = "s")]
    Show(ShowAppointmentArgs),
    /// Update an appointment's status or details
    #[command(alias = "u")]
    Update(UpdateAppointmentArgs),
    /// Delete an appointment permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteAppointmentArgs),
    /// List the bookable time slots
    Slots,
}

/// Create a new invoice from catalog products
///
/// The total is computed from the selected products at creation time. The
/// same product may be listed more than once; each occurrence is counted.
#[derive(Args)]
pub struct CreateInvoiceArgs {
    /// Name of the billed client
    pub client_name: String,
    /// National identity document, exactly 8 characters
    #[arg(long)]
    pub dni: String,
    /// Tax registration number, exactly 11 characters
    #[arg(long)]
    pub ruc: Option<String>,
    /// Billing email
    #[arg(short, long)]
    pub email: String,
    /// Payment method
    #[arg(short, long, value_enum)]
    pub payment_method: PaymentMethodArg,
    /// Catalog product IDs - comma-separated list
    #[arg(
        long = "products",
        value_delimiter = ',',
        help = "Catalog product IDs as comma-separated list"
    )]
    pub product_ids: Vec<u64>,
}

impl From<CreateInvoiceArgs> for CreateInvoice {
    fn from(val: CreateInvoiceArgs) -> Self {
        CreateInvoice {
            client_name: val.client_name,
            dni: val.dni,
            ruc: val.ruc,
            email: val.email,
            payment_method: val.payment_method.to_string(),
            product_ids: val.product_ids,
        }
    }
}

/// Show details of a specific invoice
#[derive(Args)]
pub struct ShowInvoiceArgs {
    /// ID of the invoice to display
    #[arg(help = "Unique identifier of the invoice to show details for")]
    pub id: u64,
}

impl From<ShowInvoiceArgs> for Id {
    fn from(val: ShowInvoiceArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum InvoiceCommands {
    /// Create a new invoice
    #[command(alias = "c")]
    Create(CreateInvoiceArgs),
    /// List all invoices
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific invoice
    #[command(alias = "s")]
    Show(ShowInvoiceArgs),
}

/// Add a new product to the catalog
#[derive(Args)]
pub struct AddProductArgs {
    /// Title of the product
    pub title: String,
    /// Price in soles, e.g. "60" or "75.50"
    #[arg(short, long)]
    pub price: String,
    /// Product category
    #[arg(short, long, value_enum)]
    pub category: CategoryArg,
    /// Product kind
    #[arg(short, long, value_enum)]
    pub kind: KindArg,
    /// Optional description of the design
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddProductArgs> for CreateProduct {
    fn from(val: AddProductArgs) -> Self {
        CreateProduct {
            title: val.title,
            description: val.description,
            category: val.category.to_string(),
            kind: val.kind.to_string(),
            price: val.price,
        }
    }
}

/// Show details of a specific product
#[derive(Args)]
pub struct ShowProductArgs {
    /// ID of the product to display
    #[arg(help = "Unique identifier of the product to show details for")]
    pub id: u64,
}

impl From<ShowProductArgs> for Id {
    fn from(val: ShowProductArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a product from the catalog
///
/// Appointments that reference the product keep their design snapshots.
#[derive(Args)]
pub struct DeleteProductArgs {
    /// ID of the product to delete
    #[arg(help = "Unique identifier of the product to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Add a new product to the catalog
    #[command(alias = "a")]
    Add(AddProductArgs),
    /// List the product catalog
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific product
    #[command(alias = "s")]
    Show(ShowProductArgs),
    /// Delete a product from the catalog
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProductArgs),
}

/// Command-line argument representation of payment methods
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaymentMethodArg {
    Yape,
    Plin,
    Transferencia,
}

impl From<PaymentMethodArg> for PaymentMethod {
    fn from(val: PaymentMethodArg) -> Self {
        match val {
            PaymentMethodArg::Yape => PaymentMethod::Yape,
            PaymentMethodArg::Plin => PaymentMethod::Plin,
            PaymentMethodArg::Transferencia => PaymentMethod::Transferencia,
        }
    }
}

impl std::fmt::Display for PaymentMethodArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PaymentMethod::from(*self).as_str())
    }
}

/// Command-line argument representation of appointment statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Booked and waiting to happen
    Pendiente,
    /// Cancelled by the client or the studio
    Cancelada,
    /// Service was performed
    Completado,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusArg::Pendiente => write!(f, "Pendiente"),
            StatusArg::Cancelada => write!(f, "Cancelada"),
            StatusArg::Completado => write!(f, "Completado"),
        }
    }
}

/// Command-line argument representation of product categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Bodas,
    Clasicas,
    Spa,
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryArg::Bodas => write!(f, "Bodas"),
            CategoryArg::Clasicas => write!(f, "Clásicas"),
            CategoryArg::Spa => write!(f, "Spa"),
        }
    }
}

/// Command-line argument representation of product kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Manicure,
    ManicureSpa,
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KindArg::Manicure => write!(f, "Manicure"),
            KindArg::ManicureSpa => write!(f, "Manicure Spa"),
        }
    }
}

/// Command handlers binding the scheduler to terminal output.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_appointment_command(self, command: AppointmentCommands) -> Result<()> {
        match command {
            AppointmentCommands::Book(args) => self.book_appointment(args).await,
            AppointmentCommands::List(args) => self.list_appointments(args).await,
            AppointmentCommands::Show(args) => self.show_appointment(args.into()).await,
            AppointmentCommands::Update(args) => self.update_appointment(args).await,
            AppointmentCommands::Delete(args) => self.delete_appointment(args.into()).await,
            AppointmentCommands::Slots => self.list_slots(),
        }
    }

    pub async fn handle_invoice_command(self, command: InvoiceCommands) -> Result<()> {
        match command {
            InvoiceCommands::Create(args) => self.create_invoice(args.into()).await,
            InvoiceCommands::List => self.list_invoices().await,
            InvoiceCommands::Show(args) => self.show_invoice(args.into()).await,
        }
    }

    pub async fn handle_product_command(self, command: ProductCommands) -> Result<()> {
        match command {
            ProductCommands::Add(args) => self.add_product(args.into()).await,
            ProductCommands::List => self.list_products().await,
            ProductCommands::Show(args) => self.show_product(args.into()).await,
            ProductCommands::Delete(args) => self.delete_product(args).await,
        }
    }

    async fn book_appointment(&self, args: BookAppointmentArgs) -> Result<()> {
        let mut form = BookingForm::new();
        form.client_name = args.client_name;
        form.phone = args.phone;
        form.date = args.date;
        form.slot = args.slot;
        form.status = args.status.map(|s| s.to_string());
        form.product_id = Some(args.product_id);
        form.set_payment_method(args.payment_method.into());

        match form.submit(&self.scheduler).await? {
            Some(appointment) => self
                .renderer
                .render(&CreateResult::new(appointment).to_string()),
            None => self.renderer.render(
                &OperationStatus::failure("A submission is already in progress".to_string())
                    .to_string(),
            ),
        }
    }

    pub async fn list_appointments(&self, args: ListAppointmentsArgs) -> Result<()> {
        let mut cache = AppointmentCache::new();
        match &args.client {
            Some(client) => {
                cache
                    .refresh_for_client(
                        &self.scheduler,
                        &ClientAppointments {
                            client_name: client.clone(),
                        },
                    )
                    .await?;
            }
            None => cache.refresh(&self.scheduler).await?,
        }

        let appointments = if let (Some(from), Some(to)) = (&args.from, &args.to) {
            let (start, end) = DateRange {
                start: from.clone(),
                end: to.clone(),
            }
            .parse()?;
            cache
                .by_date_range(start, end)
                .into_iter()
                .cloned()
                .collect()
        } else {
            cache.all().to_vec()
        };

        self.renderer.render(&Appointments(appointments).to_string())
    }

    async fn show_appointment(&self, params: Id) -> Result<()> {
        match self.scheduler.get_appointment(&params).await? {
            Some(appointment) => self.renderer.render(&appointment.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!(
                    "Appointment with ID {} not found",
                    params.id
                ))
                .to_string(),
            ),
        }
    }

    async fn update_appointment(&self, args: UpdateAppointmentArgs) -> Result<()> {
        let params: UpdateAppointment = args.into();

        let mut changes = Vec::new();
        if let Some(status) = &params.status {
            changes.push(format!("Changed status to {status}"));
        }
        if params.client_name.is_some() {
            changes.push("Updated client name".to_string());
        }
        if params.phone.is_some() {
            changes.push("Updated phone".to_string());
        }
        if let Some(date) = &params.date {
            changes.push(format!("Moved to {date}"));
        }
        if let Some(slot) = &params.slot {
            changes.push(format!("Moved to slot {slot}"));
        }
        if let Some(method) = &params.payment_method {
            changes.push(format!("Changed payment method to {method}"));
        }
        if params.product_id.is_some() {
            changes.push("Re-snapshotted the design".to_string());
        }

        let appointment = self.scheduler.update_appointment(&params).await?;
        self.renderer
            .render(&UpdateResult::with_changes(appointment, changes).to_string())
    }

    async fn delete_appointment(&self, params: DeleteAppointment) -> Result<()> {
        if !params.confirmed {
            return self.renderer.render(
                &OperationStatus::failure(
                    "Deletion requires confirmation. Re-run with --confirm".to_string(),
                )
                .to_string(),
            );
        }

        let id = Id { id: params.id };
        match self.scheduler.get_appointment(&id).await? {
            Some(appointment) => {
                self.scheduler.delete_appointment(&id).await?;
                self.renderer
                    .render(&DeleteResult::new(appointment).to_string())
            }
            None => self.renderer.render(
                &OperationStatus::failure(format!("Appointment with ID {} not found", params.id))
                    .to_string(),
            ),
        }
    }

    fn list_slots(&self) -> Result<()> {
        let mut output = String::from("# Bookable slots\n\n");
        for slot in TimeSlot::ALL {
            output.push_str(&format!("- {slot}\n"));
        }
        self.renderer.render(&output)
    }

    async fn create_invoice(&self, params: CreateInvoice) -> Result<()> {
        let catalog = self.scheduler.list_products().await?;
        let mut builder = InvoiceBuilder::new(catalog);
        for product_id in &params.product_ids {
            builder.add_product(*product_id);
        }

        let new_invoice = builder.build(&params)?;
        let invoice = self.scheduler.create_invoice(new_invoice).await?;
        self.renderer
            .render(&CreateResult::new(invoice).to_string())
    }

    async fn list_invoices(&self) -> Result<()> {
        let invoices = self.scheduler.list_invoices().await?;
        self.renderer.render(&Invoices(invoices).to_string())
    }

    async fn show_invoice(&self, params: Id) -> Result<()> {
        match self.scheduler.get_invoice(&params).await? {
            Some(invoice) => self.renderer.render(&invoice.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("Invoice with ID {} not found", params.id))
                    .to_string(),
            ),
        }
    }

    async fn add_product(&self, params: CreateProduct) -> Result<()> {
        let product = self.scheduler.create_product(&params).await?;
        self.renderer
            .render(&CreateResult::new(product).to_string())
    }

    async fn list_products(&self) -> Result<()> {
        let products = self.scheduler.list_products().await?;
        self.renderer.render(&Products(products).to_string())
    }

    async fn show_product(&self, params: Id) -> Result<()> {
        match self.scheduler.get_product(&params).await? {
            Some(product) => self.renderer.render(&product.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("Product with ID {} not found", params.id))
                    .to_string(),
            ),
        }
    }

    async fn delete_product(&self, args: DeleteProductArgs) -> Result<()> {
        if !args.confirm {
            return self.renderer.render(
                &OperationStatus::failure(
                    "Deletion requires confirmation. Re-run with --confirm".to_string(),
                )
                .to_string(),
            );
        }

        let id = Id { id: args.id };
        match self.scheduler.get_product(&id).await? {
            Some(product) => {
                self.scheduler.delete_product(&id).await?;
                self.renderer
                    .render(&DeleteResult::new(product).to_string())
            }
            None => self.renderer.render(
                &OperationStatus::failure(format!("Product with ID {} not found", args.id))
                    .to_string(),
            ),
        }
    }
}
