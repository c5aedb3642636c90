//! Printable bill rendering. A pure function of (order, customer, settings)
//! producing a self-contained HTML document; the frontend hands it to the
//! platform print dialog.

use crate::models::{Customer, Order, PaymentStatus, ShopSettings};

fn money(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn render(order: &Order, customer: &Customer, settings: &ShopSettings) -> String {
    let mut rows = String::new();
    for item in &order.items {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>₹{}</td><td>₹{}</td></tr>\n",
            escape(&item.clothing_type),
            item.quantity,
            money(item.price),
            money(item.total),
        ));
    }
    if order.extra_charges > 0.0 {
        rows.push_str(&format!(
            "<tr><td>Extra Charges</td><td>-</td><td>₹{0}</td><td>₹{0}</td></tr>\n",
            money(order.extra_charges)
        ));
    }
    if order.material_charges > 0.0 {
        rows.push_str(&format!(
            "<tr><td>Material Charges</td><td>-</td><td>₹{0}</td><td>₹{0}</td></tr>\n",
            money(order.material_charges)
        ));
    }
    if order.discount > 0.0 {
        rows.push_str(&format!(
            "<tr><td>Discount</td><td>-</td><td>-₹{0}</td><td>-₹{0}</td></tr>\n",
            money(order.discount)
        ));
    }

    let paid_stamp = if order.payment_status == PaymentStatus::Paid {
        "<div class=\"paid-stamp\">PAID</div>"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Bill - {order_id}</title>
<style>
  body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; background: white; }}
  .header {{ text-align: center; border-bottom: 2px solid #2563eb; padding-bottom: 20px; margin-bottom: 30px; }}
  .shop-name {{ font-size: 28px; font-weight: bold; color: #2563eb; margin: 0; }}
  .shop-details {{ margin: 10px 0; color: #666; }}
  .bill-info {{ display: flex; justify-content: space-between; margin-bottom: 30px; }}
  .customer-info, .bill-details {{ background: #f8fafc; padding: 15px; border-radius: 8px; width: 45%; }}
  .info-title {{ font-weight: bold; color: #2563eb; margin-bottom: 10px; }}
  .items-table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
  .items-table th {{ background: #2563eb; color: white; padding: 12px; text-align: left; }}
  .items-table td {{ padding: 10px 12px; border-bottom: 1px solid #e5e7eb; }}
  .totals {{ margin-top: 30px; text-align: right; }}
  .totals table {{ margin-left: auto; border-collapse: collapse; }}
  .totals td {{ padding: 5px 15px; text-align: right; }}
  .total-row {{ font-weight: bold; font-size: 18px; border-top: 2px solid #2563eb; color: #2563eb; }}
  .paid-stamp {{ display: inline-block; background: #059669; color: white; padding: 10px 20px; border-radius: 25px; font-weight: bold; margin: 20px 0; }}
  .footer {{ text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #e5e7eb; color: #666; }}
  @media print {{ body {{ margin: 0; }} }}
</style>
</head>
<body>
<div class="header">
  <h1 class="shop-name">{shop_name}</h1>
  <div class="shop-details">{shop_address}<br>Phone: {shop_phone}</div>
</div>
<div class="bill-info">
  <div class="customer-info">
    <div class="info-title">Customer Details</div>
    <strong>Name:</strong> {customer_name}<br>
    <strong>Phone:</strong> {customer_phone}<br>
    <strong>ID:</strong> {customer_id}<br>
    <strong>Address:</strong> {customer_address}
  </div>
  <div class="bill-details">
    <div class="info-title">Bill Details</div>
    <strong>Bill ID:</strong> {order_id}<br>
    <strong>Date:</strong> {created_at}<br>
    <strong>Delivery:</strong> {delivery_date}<br>
    <strong>Status:</strong> {status}
  </div>
</div>
<table class="items-table">
  <thead>
    <tr><th>Item</th><th>Quantity</th><th>Price</th><th>Total</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
<div class="totals">
  <table>
    <tr><td>Subtotal:</td><td>₹{subtotal}</td></tr>
    <tr class="total-row"><td>Total Amount:</td><td>₹{total}</td></tr>
  </table>
</div>
{paid_stamp}
<div class="footer">
  <p><strong>Thank you for choosing {shop_name}!</strong></p>
  <p>Visit us again for all your tailoring needs.</p>
</div>
</body>
</html>
"#,
        order_id = escape(&order.id),
        shop_name = escape(&settings.name),
        shop_address = escape(&settings.address),
        shop_phone = escape(&settings.phone),
        customer_name = escape(&customer.name),
        customer_phone = escape(&customer.phone),
        customer_id = escape(&customer.id),
        customer_address = escape(&customer.address),
        created_at = escape(&order.created_at),
        delivery_date = escape(&order.delivery_date),
        status = match order.payment_status {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
        },
        rows = rows,
        subtotal = money(order.subtotal),
        total = money(order.total),
        paid_stamp = paid_stamp,
    )
}
