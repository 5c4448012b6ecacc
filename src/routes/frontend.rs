//! Embedded frontend
//!
//! Serves the single-page upload form with the Leaflet map. The page posts
//! the scanned form to `/extract` and plots every resolved place; with two
//! or more resolved places it draws a trace line between them.

use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

/// Create the frontend router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>FRA Atlas - OCR + NER + WebGIS Trace</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet/dist/leaflet.css"/>
  <script src="https://unpkg.com/leaflet/dist/leaflet.js"></script>
  <style>
    body { font-family: Arial, sans-serif; margin:20px; background:#f5f5f5; }
    #map { height:500px; margin-top:20px; border-radius:8px; overflow:hidden; }
    .card { background:white; padding:20px; border-radius:10px; box-shadow:0 2px 8px rgba(0,0,0,0.1); max-width:700px; margin:auto; }
    button { background:#1a535c; color:#fff; border:none; padding:10px 15px; border-radius:5px; cursor:pointer; margin-top:10px; }
    .error { color:#b00020; margin-top:10px; }
  </style>
</head>
<body>
  <div class="card">
    <h2>Upload Claim Form</h2>
    <input type="file" id="fileInput">
    <button onclick="uploadFile()">Upload &amp; Extract</button>

    <div id="results"></div>
    <div id="map"></div>
  </div>

  <script>
    const map = L.map('map').setView([20.5937, 78.9629], 5);
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19
    }).addTo(map);

    let routeLine;

    async function uploadFile() {
      const file = document.getElementById('fileInput').files[0];
      if (!file) return alert("Please select an image");

      const formData = new FormData();
      formData.append('file', file);

      const res = await fetch('/extract', { method: 'POST', body: formData });
      const data = await res.json();

      if (!res.ok) {
        document.getElementById('results').innerHTML =
          "<p class='error'>" + (data.message || "Extraction failed") + "</p>";
        return;
      }

      document.getElementById('results').innerHTML =
        "<h3>Extracted Text:</h3><pre>" + data.text + "</pre>";

      const coords = [];
      data.entities.forEach(e => {
        if (e.label === 'PLACE' && e.coordinates) {
          const lat = e.coordinates.lat;
          const lon = e.coordinates.lon;
          coords.push([lat, lon]);
          L.marker([lat, lon]).addTo(map).bindPopup(`${e.text}`);
        }
      });

      if (routeLine) {
        map.removeLayer(routeLine);
      }

      if (coords.length > 1) {
        routeLine = L.polyline(coords, {color:'red', weight:3}).addTo(map);
        map.fitBounds(routeLine.getBounds());
      } else if (coords.length === 1) {
        map.setView(coords[0], 8);
      }
    }
  </script>
</body>
</html>
"#;
