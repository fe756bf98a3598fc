//! Hands a generated WFS URL to the OpenLayers map page.
//!
//! The page itself (tiles, WMS overlay, vector styling, fetch errors) is owned
//! by the browser; this module only substitutes the URL into it.

const WMS_URL: &str = "https://mapstack2.mapit.co.za/geoserver/mtn/wms";
const WMS_LAYER: &str = "mtn:mtn_rivonia_geom_traffic";
/// Rivonia, lon/lat.
const MAP_CENTER: (f64, f64) = (28.0473, -26.0475);
const MAP_ZOOM: u8 = 12;
const WFS_FETCH_DELAY_MS: u32 = 2000;

pub fn render_map_html(wfs_url: &str) -> String {
    let wfs_url = escape_template_literal(wfs_url);
    let (lon, lat) = MAP_CENTER;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta name="viewport" content="initial-scale=1,maximum-scale=1,user-scalable=no" />
    <title>Display WFS and WMS Data with Layer Switcher</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/ol@v10.1.0/ol.css" />
    <link rel="stylesheet" href="https://unpkg.com/ol-layerswitcher@4.0.0/dist/ol-layerswitcher.css" />
    <script src="https://cdn.jsdelivr.net/npm/ol@v10.1.0/dist/ol.js"></script>
    <script src="https://unpkg.com/ol-layerswitcher@4.0.0/dist/ol-layerswitcher.js"></script>
    <style>
      #map {{ width: 100%; height: 600px; margin: 0; padding: 0; opacity: 0; transition: opacity 0.5s ease-in; }}
      #loading {{ position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); font-size: 1.2em; color: #333; }}
    </style>
  </head>
  <body>
    <div id="loading">Loading map...</div>
    <div id="map" class="map"></div>
    <script>
      function showMap() {{
        document.getElementById('map').style.opacity = '1';
        document.getElementById('loading').style.display = 'none';
      }}

      var baseLayer = new ol.layer.Tile({{
        source: new ol.source.OSM(),
        title: 'OSM Base Map',
        type: 'base'
      }});

      var view = new ol.View({{
        center: ol.proj.transform([{lon}, {lat}], 'EPSG:4326', 'EPSG:3857'),
        zoom: {MAP_ZOOM}
      }});

      var wmsLayerTraffic = new ol.layer.Tile({{
        source: new ol.source.TileWMS({{
          url: '{WMS_URL}',
          params: {{ 'LAYERS': '{WMS_LAYER}', 'TILED': true, 'FORMAT': 'image/png', 'SRS': 'EPSG:4326' }},
          serverType: 'geoserver',
          crossOrigin: 'anonymous'
        }}),
        title: 'Traffic WMS Layer'
      }});

      var map = new ol.Map({{
        target: 'map',
        layers: [baseLayer, wmsLayerTraffic],
        view: view
      }});

      setTimeout(() => {{
        fetch(`{wfs_url}`)
          .then(response => response.json())
          .then(data => {{
            var vectorSource = new ol.source.Vector({{
              features: new ol.format.GeoJSON().readFeatures(data, {{ featureProjection: 'EPSG:3857' }})
            }});
            var wfsLayer = new ol.layer.Vector({{
              source: vectorSource,
              style: new ol.style.Style({{
                stroke: new ol.style.Stroke({{ color: 'blue', width: 2 }}),
                fill: new ol.style.Fill({{ color: 'rgba(0, 0, 255, 0.1)' }})
              }}),
              title: 'WFS Query Results'
            }});
            map.addLayer(wfsLayer);
            map.getView().fit(vectorSource.getExtent(), {{ padding: [50, 50, 50, 50] }});
            showMap();
          }})
          .catch(error => {{
            console.error('Error loading WFS data:', error);
            document.getElementById('loading').innerHTML = 'Error loading map data';
          }});
      }}, {WFS_FETCH_DELAY_MS});

      map.addControl(new ol.control.LayerSwitcher({{
        activationMode: 'click',
        startActive: true,
        tipLabel: 'Layers',
        groupSelectStyle: 'children'
      }}));

      map.on('click', function(event) {{
        var degrees = ol.proj.transform(event.coordinate, 'EPSG:3857', 'EPSG:4326');
        alert('Coordinates: ' + ol.coordinate.toStringHDMS(degrees));
      }});
    </script>
  </body>
</html>
"#
    )
}

/// The URL lands inside a JS template literal; keep it from closing the
/// literal, interpolating, or ending the script block.
fn escape_template_literal(url: &str) -> String {
    url.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_url_in_fetch_call() {
        let html = render_map_html("https://example/ows?CQL_FILTER=day='Monday'");
        assert!(html.contains("fetch(`https://example/ows?CQL_FILTER=day='Monday'`)"));
        assert!(html.contains("'LAYERS': 'mtn:mtn_rivonia_geom_traffic'"));
        assert!(html.contains("[28.0473, -26.0475]"));
        assert!(html.contains("zoom: 12"));
        assert!(html.contains("}, 2000);"));
    }

    #[test]
    fn url_cannot_break_out_of_template_literal() {
        let html = render_map_html("https://x/`${alert(1)}`</script>");
        assert!(html.contains("fetch(`https://x/\\`\\${alert(1)}\\`<\\/script>`)"));
    }
}
